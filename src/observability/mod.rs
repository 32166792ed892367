//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LoggingConfig
//!     → logging.rs (tracing subscriber on stderr)
//!
//! Consumers:
//!     → sink write failures, response encoding failures, fs diagnostics
//! ```

pub mod logging;

pub use logging::{init_logging, LoggingError};
