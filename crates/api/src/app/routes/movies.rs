use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    routing::get,
};

use cinefluent_catalog::placeholder;
use cinefluent_core::{Lesson, Movie};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_movies))
        .route("/:id", get(get_movie))
        .route("/:id/lessons", get(movie_lessons))
}

pub async fn list_movies(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MoviesQuery>,
) -> Json<Vec<Movie>> {
    tracing::info!(language = ?query.language, "fetching movie list");

    let movies = services
        .catalog()
        .movies()
        .iter()
        .filter(|movie| match query.language.as_deref() {
            Some(language) if language != "All" => movie.language == language,
            _ => true,
        })
        .cloned()
        .collect();

    Json(movies)
}

pub async fn get_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    services
        .catalog()
        .movie(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("movie"))
}

/// Lessons for a movie. Movies without authored lessons get placeholders
/// labeled with the requested id; this endpoint never 404s.
pub async fn movie_lessons(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Json<Vec<Lesson>> {
    let catalog = services.catalog();

    let mut lessons = catalog.lessons_for_movie(&id);
    if lessons.is_empty() {
        lessons = placeholder::lessons_for_movie(&id, catalog.vocabulary(), catalog.quiz());
    }

    Json(lessons)
}
