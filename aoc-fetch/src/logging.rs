//! Logging init: human-readable events on stderr

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,aoc_fetch=info,aoc_http_client=info";

/// Initialize logging to stderr
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
