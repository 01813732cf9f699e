use std::sync::Arc;

use axum::{Extension, Json, Router, routing::post};
use serde_json::json;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> Result<Json<dto::AuthResponse>, ApiError> {
    tracing::info!(username = %body.username, "login attempt");

    let user = services
        .accounts()
        .authenticate(&body.username, &body.password)
        .ok_or(ApiError::InvalidCredentials)?
        .clone();

    let token = services.tokens().issue(&user.id)?;

    Ok(Json(dto::AuthResponse { user, token }))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> Result<Json<dto::AuthResponse>, ApiError> {
    tracing::info!(email = %body.email, "registration attempt");

    body.validate()?;

    if services.accounts().email_taken(&body.email) {
        return Err(ApiError::EmailTaken);
    }

    // Nothing is stored: the fabricated user exists only in this response,
    // plus whatever the issued token says about it.
    let user = services.accounts().register(&body.email, &body.name);
    let token = services.tokens().issue(&user.id)?;

    Ok(Json(dto::AuthResponse { user, token }))
}

pub async fn logout() -> Json<serde_json::Value> {
    // Tokens are stateless; there is nothing to revoke.
    Json(json!({ "message": "Successfully logged out" }))
}
