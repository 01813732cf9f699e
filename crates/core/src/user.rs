use serde::{Deserialize, Serialize};

/// An account record as returned by the auth and profile endpoints.
///
/// Earlier snapshots of this API disagreed on naming (`totalWords` vs
/// `total_words`, `isActive` vs `is_active`); camelCase is the canonical
/// wire contract, the Rust fields stay snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    /// Display level such as "Intermediate B1".
    pub level: String,
    pub streak: u32,
    pub total_words: u32,
    /// Display string such as "47h 23m".
    pub study_time: String,
    pub is_active: bool,
}

/// Per-language learning progress shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    pub name: String,
    pub level: String,
    pub progress: u8,
    pub flag: String,
    pub words_learned: u32,
    pub next_milestone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_canonical_names() {
        let user = User {
            id: "1".into(),
            email: "demo@cinefluent.com".into(),
            name: "Demo User".into(),
            avatar: None,
            level: "Intermediate B1".into(),
            streak: 12,
            total_words: 1247,
            study_time: "47h 23m".into(),
            is_active: true,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["totalWords"], 1247);
        assert_eq!(json["studyTime"], "47h 23m");
        assert_eq!(json["isActive"], true);
        assert!(json.get("is_active").is_none());
    }
}
