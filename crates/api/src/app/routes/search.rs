use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Query,
    routing::get,
};

use cinefluent_core::{Movie, VocabularyItem};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/movies", get(search_movies))
        .route("/vocabulary", get(search_vocabulary))
}

pub async fn search_movies(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MovieSearchQuery>,
) -> Json<Vec<Movie>> {
    tracing::info!(
        q = %query.q,
        language = ?query.language,
        difficulty = ?query.difficulty,
        "searching movies"
    );

    let needle = query.q.to_lowercase();

    let movies = services
        .catalog()
        .movies()
        .iter()
        .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
        .filter(|movie| match query.language.as_deref() {
            Some(language) if language != "All" => movie.language == language,
            _ => true,
        })
        .filter(|movie| match query.difficulty.as_deref() {
            Some(difficulty) if difficulty != "All" => movie.difficulty == difficulty,
            _ => true,
        })
        .take(query.limit)
        .cloned()
        .collect();

    Json(movies)
}

pub async fn search_vocabulary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::VocabularySearchQuery>,
) -> Json<Vec<VocabularyItem>> {
    let needle = query.q.to_lowercase();

    let items = services
        .catalog()
        .vocabulary()
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.word.to_lowercase().contains(&needle)
                || item.translation.to_lowercase().contains(&needle)
        })
        .take(query.limit)
        .cloned()
        .collect();

    Json(items)
}
