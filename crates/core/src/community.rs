use serde::{Deserialize, Serialize};

/// A post in the community feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    /// Display name of the author.
    pub user: String,
    pub initials: String,
    /// Relative display time such as "2m ago".
    pub time: String,
    pub content: String,
    pub likes: u32,
    pub is_liked: bool,
    /// crown, medal or award; absent for unranked users.
    pub badge: Option<String>,
    pub streak: u32,
}

/// One row of the points leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub streak: u32,
    /// Rank movement since last week: "+5", "-1", "0".
    pub change: String,
    pub badge: Option<String>,
    pub avatar: String,
    pub level: String,
    pub is_current_user: bool,
}
