//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>

use tracing::level_filters::LevelFilter;

use crate::config::schema::LoggingConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.level.trim().parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::UnknownLevel(config.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
