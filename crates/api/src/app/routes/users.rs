use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    routing::get,
};
use serde_json::json;

use cinefluent_catalog::accounts;
use cinefluent_core::{LanguageProgress, User};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/me", get(me))
        .route("/languages", get(languages))
        .route("/preferences", get(preferences).put(update_preferences))
        .route("/stats", get(stats))
}

pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<User>, ApiError> {
    let subject = ctx.subject().ok_or(ApiError::Unauthenticated)?;

    // Registered users are never stored, so a valid token can carry a
    // subject the directory has no record of; those get a stand-in.
    let user = services
        .accounts()
        .user_by_id(subject)
        .cloned()
        .unwrap_or_else(|| accounts::placeholder_user(subject));

    Ok(Json(user))
}

pub async fn languages(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<LanguageProgress>> {
    Json(services.catalog().languages().to_vec())
}

pub async fn preferences() -> Json<serde_json::Value> {
    Json(json!({
        "language": {
            "primary": "Spanish",
            "learning": ["Spanish", "French", "German"]
        },
        "notifications": {
            "dailyReminder": true,
            "streakReminder": true,
            "achievementAlerts": true,
            "communityUpdates": false
        },
        "display": {
            "theme": "system",
            "subtitleSize": "medium",
            "playbackSpeed": 1.0
        },
        "privacy": {
            "profileVisible": true,
            "progressVisible": true,
            "achievementsVisible": true
        }
    }))
}

pub async fn update_preferences(
    Extension(ctx): Extension<AuthContext>,
    Json(preferences): Json<serde_json::Value>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    // Echoed, not saved; the next GET returns the defaults again.
    Ok(Json(dto::ActionResponse::success(
        "Preferences updated successfully",
        preferences,
    )))
}

pub async fn stats(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    let total_movies = services.catalog().movies().len();

    Json(json!({
        "streak": {
            "current": 12,
            "longest": 28,
            "weeklyGoal": 5,
            "weeklyProgress": 3
        },
        "vocabulary": {
            "totalWords": 1247,
            "weeklyWords": 47,
            "masterLevel": 892
        },
        "time": {
            "totalTime": "47h 23m",
            "weeklyTime": "3h 45m",
            "averageSession": "23m"
        },
        "movies": {
            "completed": 3,
            "inProgress": 2,
            "totalAvailable": total_movies
        },
        "achievements": {
            "earned": 8,
            "inProgress": 3,
            "total": 15
        },
        "ranking": {
            "currentRank": 4,
            "points": 1847,
            "nextRankPoints": 2000
        }
    }))
}
