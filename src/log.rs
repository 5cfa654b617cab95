// src/log.rs
// Diagnostics go to stderr; stdout is reserved for the JSON record.
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Filter comes from `RUST_LOG`, else `warn`.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
