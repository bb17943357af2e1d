//! Tracing subscriber setup.
//!
//! Logs go to stderr so the rendered page on stdout stays readable. Filter
//! directives come from `MOVIERECS_LOG`, then `RUST_LOG`, then the default.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "MOVIERECS_LOG";
pub const DEFAULT_DIRECTIVES: &str = "movierecs=info";

/// Installs the global subscriber. Call once, before loading config.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}

/// Unparseable directives fall through to the next source.
fn build_env_filter() -> EnvFilter {
    [LOG_ENV_VAR, "RUST_LOG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
