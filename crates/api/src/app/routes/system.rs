use std::sync::Arc;

use axum::{Extension, Json};
use chrono::Utc;
use serde_json::json;

use crate::app::services::AppServices;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the CineFluent API",
        "version": VERSION,
        "status": "Complete frontend integration ready",
        "features": [
            "Authentication & Authorization",
            "Movie & Lesson Management",
            "Progress Tracking",
            "Community Features",
            "Achievement System",
            "Leaderboard",
            "Weekly Activity Tracking"
        ],
        "environment": services.environment(),
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "cinefluent-api",
        "version": VERSION,
        "catalog": "static_data_ready",
        "features_ready": {
            "authentication": true,
            "movies": true,
            "lessons": true,
            "progress": true,
            "community": true,
            "achievements": true,
            "leaderboard": true
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn status(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    let catalog = services.catalog();

    Json(json!({
        "api_version": VERSION,
        "status": "operational",
        "environment": services.environment(),
        "features": {
            "authentication": "enabled",
            "movies": "enhanced_data",
            "lessons": "dynamic_generation",
            "progress_tracking": "enabled",
            "community": "enabled",
            "achievements": "enabled",
            "leaderboard": "enabled",
            "search": "enabled",
            "analytics": "enabled"
        },
        "data": {
            "movies": catalog.movies().len(),
            "lessons": catalog.lessons().len(),
            "achievements": catalog.achievements().len(),
            "community_posts": catalog.community_posts().len(),
            "leaderboard_entries": catalog.leaderboard().len()
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
