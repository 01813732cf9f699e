use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use cinefluent_catalog::activity;
use cinefluent_core::WeeklyActivity;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(update_progress))
        .route("/weekly", get(weekly_progress))
}

/// Accepts a progress report and echoes it back; nothing is written
/// anywhere. Anonymous callers are tolerated (and logged); the mobile app
/// fires these before login finishes.
pub async fn update_progress(
    Extension(ctx): Extension<AuthContext>,
    Json(body): Json<dto::ProgressUpdate>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    body.validate()?;

    if ctx.subject().is_none() {
        tracing::warn!(lesson_id = %body.lesson_id, "progress update without authentication");
    }

    Ok(Json(dto::ActionResponse::success(
        "Progress updated successfully",
        json!({
            "lessonId": body.lesson_id,
            "completed": body.completed,
            "score": body.score,
            "timeSpent": body.time_spent,
            "wordsLearned": body.vocabulary_mastered.len(),
            "timestamp": Utc::now().to_rfc3339(),
        }),
    )))
}

pub async fn weekly_progress() -> Json<Vec<WeeklyActivity>> {
    Json(activity::weekly_activity(Utc::now()))
}
