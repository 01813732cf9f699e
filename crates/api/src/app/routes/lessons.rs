use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Path,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use cinefluent_catalog::placeholder;
use cinefluent_core::Lesson;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/:id", get(get_lesson))
        .route("/:id/complete", post(complete_lesson))
}

/// `/api/v1/vocabulary/...`: word-level interaction lives with lessons.
pub fn vocabulary_router() -> Router {
    Router::new().route("/:word_id/master", post(master_word))
}

/// Unknown lesson ids fall back to a synthesized stand-in, HTTP 200.
/// Unlike movie lookups this endpoint never 404s; clients deep-link into
/// lessons that were never authored.
pub async fn get_lesson(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Json<Lesson> {
    let catalog = services.catalog();

    let lesson = catalog
        .lesson(&id)
        .cloned()
        .unwrap_or_else(|| placeholder::lesson(&id, catalog.vocabulary(), catalog.quiz()));

    Json(lesson)
}

pub async fn complete_lesson(
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::CompleteLessonRequest>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    Ok(Json(dto::ActionResponse::success(
        "Lesson completed successfully",
        json!({
            "lessonId": id,
            "completedAt": Utc::now().to_rfc3339(),
            "score": body.score,
            "timeSpent": body.time_spent,
            "newWordsLearned": body.new_words_learned,
        }),
    )))
}

pub async fn master_word(
    Extension(ctx): Extension<AuthContext>,
    Path(word_id): Path<String>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    tracing::info!(word_id = %word_id, "marking word as mastered");

    Ok(Json(dto::ActionResponse::success(
        "Word marked as mastered",
        json!({
            "wordId": word_id,
            "masteredAt": Utc::now().to_rfc3339(),
        }),
    )))
}
