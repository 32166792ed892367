//! Structured event logging.
//!
//! # Data Flow
//! ```text
//! caller (event name, correlation ID, extra fields)
//!     → logger.rs (debug gate / once-only cache)
//!     → fields.rs (reserved fields + merge, extra wins)
//!     → sink.rs (JSON line on stdout, or tracing bridge)
//! ```

pub mod correlation;
pub mod fields;
pub mod logger;
pub mod sink;

pub use correlation::generate_correlation_id;
pub use fields::{merge_fields, Fields};
pub use logger::EventLogger;
pub use sink::{JsonLineSink, LogRecord, LogSink, Severity, TracingSink};
