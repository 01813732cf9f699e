use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::AccessClaims;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign access token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies access tokens with a shared secret.
///
/// HS-family algorithms only; the keys are derived from one secret, so the
/// issuer and the verifier are always the same process (or share config).
pub struct AccessTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl AccessTokens {
    pub fn new(secret: &[u8], algorithm: Algorithm, lifetime_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            algorithm,
            lifetime: Duration::minutes(lifetime_minutes),
        }
    }

    /// Issue a token for `subject`, expiring after the configured lifetime.
    ///
    /// The only failure mode is the signing library itself erroring (e.g. a
    /// non-HMAC algorithm paired with a secret key); that propagates so the
    /// caller can surface it as a server error.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: subject.to_string(),
            exp: (Utc::now() + self.lifetime).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its subject.
    ///
    /// Every decode failure (bad signature, malformed token, wrong
    /// algorithm, expiry) collapses into `None`. Callers treat `None` as
    /// "unauthenticated"; which endpoints reject and which degrade is their
    /// call, not this layer's.
    pub fn verify(&self, token: &str) -> Option<String> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        match jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &validation) {
            Ok(data) => Some(data.claims.sub),
            Err(err) => {
                tracing::debug!(error = %err, "access token rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens() -> AccessTokens {
        AccessTokens::new(b"test-secret", Algorithm::HS256, 30)
    }

    #[test]
    fn issued_token_verifies_back_to_subject() {
        let tokens = tokens();
        let token = tokens.issue("1").expect("issue");
        assert_eq!(tokens.verify(&token).as_deref(), Some("1"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = tokens();
        let stale = AccessClaims {
            sub: "1".to_string(),
            exp: (Utc::now() - Duration::minutes(5)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), None);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = AccessTokens::new(b"other-secret", Algorithm::HS256, 30);
        let token = other.issue("1").unwrap();

        assert_eq!(tokens().verify(&token), None);
    }

    #[test]
    fn garbage_is_rejected_not_an_error() {
        assert_eq!(tokens().verify("not-a-token"), None);
        assert_eq!(tokens().verify(""), None);
        assert_eq!(tokens().verify("a.b.c"), None);
    }

    #[test]
    fn algorithm_mismatch_is_rejected() {
        let hs384 = AccessTokens::new(b"test-secret", Algorithm::HS384, 30);
        let token = hs384.issue("1").unwrap();

        // Same secret, different configured algorithm.
        assert_eq!(tokens().verify(&token), None);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_arbitrary_subjects(subject in "[a-zA-Z0-9_-]{1,64}") {
            let tokens = tokens();
            let token = tokens.issue(&subject).unwrap();
            prop_assert_eq!(tokens.verify(&token), Some(subject));
        }
    }
}
