use serde::{Deserialize, Serialize};

use cinefluent_core::User;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Login payload. The frontend sends the email in a `username` field.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.email.contains('@') || self.email.trim().is_empty() {
            return Err(ApiError::validation("email is not a valid address"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("password must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub lesson_id: String,
    pub completed: bool,
    pub score: i64,
    pub time_spent: i64,
    #[serde(default)]
    pub vocabulary_mastered: Vec<String>,
}

impl ProgressUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(0..=100).contains(&self.score) {
            return Err(ApiError::validation("score must be between 0 and 100"));
        }
        if self.time_spent < 0 {
            return Err(ApiError::validation("timeSpent must be non-negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
}

/// Completion report for a lesson. Every field is optional on the wire;
/// absent values echo back as zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLessonRequest {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time_spent: i64,
    #[serde(default)]
    pub new_words_learned: i64,
}

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    #[serde(default = "default_posts_limit")]
    pub limit: usize,
}

fn default_posts_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default = "default_leaderboard_limit")]
    pub limit: usize,
}

fn default_leaderboard_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct MovieSearchQuery {
    #[serde(default)]
    pub q: String,
    pub language: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default = "default_movie_search_limit")]
    pub limit: usize,
}

fn default_movie_search_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
pub struct VocabularySearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_vocabulary_search_limit")]
    pub limit: usize,
}

fn default_vocabulary_search_limit() -> usize {
    50
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// The canned write-endpoint envelope: a status line plus an echo of what
/// the caller sent, with server-derived fields mixed in.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub status: &'static str,
    pub message: String,
    pub data: serde_json::Value,
}

impl ActionResponse {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}
