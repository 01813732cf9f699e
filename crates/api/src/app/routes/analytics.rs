use std::sync::Arc;

use axum::{Extension, Json, Router, routing::get};
use serde_json::json;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/dashboard", get(dashboard))
}

/// Platform-wide numbers for the dashboard. Fan data except for the
/// catalog-derived counts.
pub async fn dashboard(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    let movies = services.catalog().movies();
    let total_lessons: u32 = movies.iter().map(|movie| movie.total_lessons).sum();

    Json(json!({
        "totalUsers": 12847,
        "totalLessonsCompleted": 156789,
        "averageSessionTime": "23m 45s",
        "topLanguages": ["Spanish", "French", "German"],
        "totalMovies": movies.len(),
        "totalLessons": total_lessons,
        "userGrowth": "+15.2%",
        "engagement": {
            "dailyActiveUsers": 3421,
            "weeklyActiveUsers": 8934,
            "averageStreak": 8.5
        }
    }))
}
