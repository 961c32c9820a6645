//! Logging setup: a stderr tracing subscriber so stdout carries only command output

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Errors that may occur while initializing logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose` and `info`
/// without.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| LoggingError::SetGlobal(e.to_string()))
}
