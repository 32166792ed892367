//! Diagnostic logging.
//!
//! # Responsibilities
//! - Initialize the process `tracing` subscriber from `LoggingConfig`
//!
//! # Design Decisions
//! - JSON format for production, pretty format for development
//! - Level comes from config only, never from the environment
//! - Diagnostics go to stderr so stdout carries only event records

use tracing_subscriber::filter::{EnvFilter, ParseError};

use crate::config::{LogFormat, LoggingConfig};

/// Error type for subscriber installation.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global diagnostic subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.level.trim())?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(LoggingError::Install)?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
