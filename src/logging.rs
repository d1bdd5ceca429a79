//! Diagnostic logging to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `--log-level` is not given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter for the given level directive (e.g. `debug`, `recordwise=trace`).
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: '{level}'"))
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never mix with the page on stdout.
pub fn init(level: &str, ansi: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
