//! Tracing subscriber setup for the CLI.
//!
//! Engine events go to stderr so command output on stdout stays parseable.
//! `RUST_LOG` wins over the configured level when set.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Later calls are ignored, which keeps
/// repeated `run` invocations in one process (tests) working.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
