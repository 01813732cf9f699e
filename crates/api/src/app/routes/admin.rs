use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new().route("/stats", get(admin_stats))
}

/// `/api/v1/dev/...`: development helpers with no real effect.
pub fn dev_router() -> Router {
    Router::new()
        .route("/reset-progress", post(reset_progress))
        .route("/generate-data", get(generate_data))
}

pub async fn admin_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<serde_json::Value> {
    let catalog = services.catalog();

    Json(json!({
        "users": {
            "total": 12847,
            "active_today": 3421,
            "new_this_week": 234
        },
        "content": {
            "movies": catalog.movies().len(),
            // Rough estimates; only the movie count is real.
            "lessons": catalog.lessons().len() * catalog.movies().len(),
            "vocabulary_items": catalog.vocabulary().len() * 50
        },
        "engagement": {
            "lessons_completed_today": 8934,
            "average_session_time": "23m 45s",
            "retention_rate": "78.5%"
        }
    }))
}

/// Acknowledges a reset without resetting anything; there is no stored
/// progress to clear.
pub async fn reset_progress(
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    let subject = ctx.subject().ok_or(ApiError::Unauthenticated)?;

    tracing::info!(user_id = %subject, "resetting user progress");

    Ok(Json(dto::ActionResponse::success(
        "User progress reset successfully",
        json!({
            "userId": subject,
            "resetAt": Utc::now().to_rfc3339(),
        }),
    )))
}

pub async fn generate_data(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<serde_json::Value> {
    let catalog = services.catalog();

    Json(json!({
        "movies": catalog.movies().len(),
        "lessons": catalog.lessons().len(),
        "achievements": catalog.achievements().len(),
        "community_posts": catalog.community_posts().len(),
        "leaderboard_entries": catalog.leaderboard().len(),
        "generated_at": Utc::now().to_rfc3339(),
    }))
}
