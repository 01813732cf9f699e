use serde::{Deserialize, Serialize};

/// JWT claims carried by an access token.
///
/// Deliberately minimal: the subject (a user id) and the expiry. Anything
/// else about the user is looked up per request, never baked into the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user id the token was issued for.
    pub sub: String,

    /// Expiration as a unix timestamp (seconds).
    pub exp: i64,
}
