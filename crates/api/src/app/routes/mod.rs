use axum::{Router, routing::get};

pub mod achievements;
pub mod admin;
pub mod analytics;
pub mod auth;
pub mod community;
pub mod lessons;
pub mod movies;
pub mod progress;
pub mod search;
pub mod system;
pub mod users;

/// Router for everything under `/api/v1`.
pub fn api_router() -> Router {
    Router::new()
        .route("/status", get(system::status))
        .nest("/auth", auth::router())
        .nest("/user", users::router())
        .nest("/movies", movies::router())
        .nest("/lessons", lessons::router())
        .nest("/vocabulary", lessons::vocabulary_router())
        .nest("/progress", progress::router())
        .nest("/achievements", achievements::router())
        .nest("/community", community::router())
        .nest("/search", search::router())
        .nest("/analytics", analytics::router())
        .nest("/admin", admin::router())
        .nest("/dev", admin::dev_router())
}
