//! `cinefluent-auth` — stateless bearer-token helper.
//!
//! Issues and verifies signed, time-limited access tokens. There is no
//! session store behind this: a token is the whole credential, and
//! verification is a pure function of the token, the shared secret and the
//! clock. No refresh, no revocation.

pub mod claims;
pub mod token;

pub use claims::AccessClaims;
pub use token::{AccessTokens, TokenError};

// Re-exported so callers configure the signing algorithm without naming
// the JWT library themselves.
pub use jsonwebtoken::Algorithm;
