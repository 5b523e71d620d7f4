//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the game text on stdout.
//! `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
