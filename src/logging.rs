//! Diagnostics go to stderr through `tracing`; stdout is reserved for user-facing messages.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Verbosity comes from `RUST_LOG`, warnings only by default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber may already be installed, e.g. when called twice from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
