//! Logging initialization with tracing

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - `RUST_LOG` when set, otherwise WARN (DEBUG with `--verbose`)
/// - Stderr output (stdout carries the result)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
