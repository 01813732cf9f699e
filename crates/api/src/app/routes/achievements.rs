use std::sync::Arc;

use axum::{Extension, Json, Router, routing::get};

use cinefluent_core::Achievement;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_achievements))
}

pub async fn list_achievements(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<Achievement>> {
    Json(services.catalog().achievements().to_vec())
}
