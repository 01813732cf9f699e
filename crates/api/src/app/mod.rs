//! HTTP application wiring (axum router + service wiring).
//!
//! Layout mirrors the route surface:
//! - `services.rs`: the shared state handed to handlers (catalog, accounts, tokens)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and their validation
//! - `errors.rs`: consistent, sanitized error responses

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use cinefluent_auth::AccessTokens;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    let tokens = Arc::new(AccessTokens::new(
        config.secret_key.as_bytes(),
        config.token_algorithm,
        config.token_lifetime_minutes,
    ));
    let services = Arc::new(AppServices::demo(tokens, config.environment.clone()));

    build_app_with(config, services)
}

/// Same wiring with injected services, so tests can substitute fixtures.
pub fn build_app_with(config: &Config, services: Arc<AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        tokens: services.tokens(),
    };

    // Every /api/v1 request gets an AuthContext; handlers decide whether a
    // missing subject is fatal.
    let api = routes::api_router()
        .layer(Extension(Arc::clone(&services)))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_context,
        ));

    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest("/api/v1", api)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
