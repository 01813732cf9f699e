use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use cinefluent_core::{CommunityPost, LeaderboardEntry};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id/like", post(like_post).delete(unlike_post))
        .route("/leaderboard", get(leaderboard))
}

pub async fn list_posts(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PostsQuery>,
) -> Json<Vec<CommunityPost>> {
    let posts = services
        .catalog()
        .community_posts()
        .iter()
        .take(query.limit)
        .cloned()
        .collect();

    Json(posts)
}

/// Builds the post the feed would show and returns it; the feed itself is
/// static, so the post is gone on the next read.
pub async fn create_post(
    Extension(ctx): Extension<AuthContext>,
    Json(body): Json<dto::PostMessageRequest>,
) -> Result<Json<CommunityPost>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    Ok(Json(CommunityPost {
        id: Uuid::now_v7().to_string(),
        user: "You".into(),
        initials: "YU".into(),
        time: "now".into(),
        content: body.content,
        likes: 0,
        is_liked: false,
        badge: None,
        streak: 12,
    }))
}

pub async fn leaderboard(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    let entries = services
        .catalog()
        .leaderboard()
        .iter()
        .take(query.limit)
        .cloned()
        .collect();

    Json(entries)
}

pub async fn like_post(
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    Ok(Json(dto::ActionResponse::success(
        "Post liked successfully",
        json!({
            "postId": id,
            "likedAt": Utc::now().to_rfc3339(),
        }),
    )))
}

pub async fn unlike_post(
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<dto::ActionResponse>, ApiError> {
    ctx.subject().ok_or(ApiError::Unauthenticated)?;

    Ok(Json(dto::ActionResponse::success(
        "Post unliked successfully",
        json!({
            "postId": id,
            "unlikedAt": Utc::now().to_rfc3339(),
        }),
    )))
}
