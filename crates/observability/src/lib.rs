//! `saucedemo-observability` — shared tracing/logging setup.
//!
//! Test runs are read by humans, so output is compact text rather than
//! structured JSON. Filtering comes from `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
