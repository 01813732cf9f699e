use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use cinefluent_auth::AccessTokens;

use crate::context::AuthContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<AccessTokens>,
}

/// Resolve the bearer token (if any) into an [`AuthContext`].
///
/// This never rejects: a missing, malformed or expired token simply yields
/// an anonymous context. Endpoints that need a subject answer 401 on their
/// own, which lets read endpoints degrade gracefully for logged-out users.
pub async fn auth_context(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let context = extract_bearer(req.headers())
        .and_then(|token| state.tokens.verify(token))
        .map_or_else(AuthContext::anonymous, AuthContext::authenticated);

    req.extensions_mut().insert(context);

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_bearer(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract_bearer(&headers_with("Basic abc")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }
}
