//! Diagnostic logging setup.
//!
//! Logs go to stderr so that command output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen from the command line.

use crate::cli::LogFormat;
use crate::constants::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init(format: LogFormat, verbose: bool) -> AppResult<()> {
    let level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
