//! Logging setup: tracing to stderr so log lines don't fight with the
//! in-place counter/progress output on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize the subscriber. `RUST_LOG` overrides the default level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
