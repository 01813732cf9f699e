//! `cinefluent-catalog` — the read-only data behind the demo API.
//!
//! Everything here is constructed once at startup and never mutated:
//! the authored catalog ([`StaticCatalog`]), the closed login directory
//! ([`AccountDirectory`]), and the request-time fabrications (placeholder
//! lessons, the synthetic activity series) derived from it.

pub mod accounts;
pub mod activity;
pub mod fixtures;
pub mod placeholder;
pub mod provider;

pub use accounts::AccountDirectory;
pub use provider::{Catalog, StaticCatalog};
