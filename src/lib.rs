//! Structured event logging helpers.
//!
//! - `events` - Debug-gated, always-on and once-only event records
//! - `http` - JSON success/error responses for axum handlers
//! - `config` - Logging configuration (TOML)
//! - `observability` - Diagnostic `tracing` subscriber
//! - `fs` - Working-directory lookup

pub mod config;
pub mod events;
pub mod fs;
pub mod http;
pub mod observability;

pub use config::LoggingConfig;
pub use events::{generate_correlation_id, merge_fields, EventLogger, Fields, LogRecord, LogSink};
pub use http::{respond_with_error, respond_with_success, ApiError};
