//! `cinefluent-observability` — shared tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging: JSON lines on stdout, filter from
/// `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops, which keeps
/// test binaries that share a process from fighting over the subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
