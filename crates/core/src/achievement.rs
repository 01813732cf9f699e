use serde::{Deserialize, Serialize};

/// Where the user stands on an achievement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementStatus {
    Earned,
    #[serde(rename = "In Progress")]
    InProgress,
    Locked,
}

/// A badge on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: AchievementStatus,
    pub icon: String,
    /// Theme color token (primary, warning, success, muted).
    pub color: String,
    /// Percent complete, only meaningful for in-progress achievements.
    pub progress: Option<u8>,
    /// Relative display time such as "2 days ago", only set once earned.
    pub earned_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_display_spelling() {
        assert_eq!(
            serde_json::to_value(AchievementStatus::InProgress).unwrap(),
            "In Progress"
        );
        assert_eq!(
            serde_json::to_value(AchievementStatus::Earned).unwrap(),
            "Earned"
        );
    }
}
