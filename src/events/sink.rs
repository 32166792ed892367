//! Structured-logging sinks.
//!
//! # Responsibilities
//! - Define the record handed from the event logger to a sink
//! - Render records as one JSON object per line (default: stdout)
//! - Bridge records into the process `tracing` subscriber
//!
//! # Design Decisions
//! - Emission is fire-and-forget: a sink never returns an error to the caller
//! - Keys are written sorted, `level`/`msg`/`time` sit alongside record fields

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::events::fields::{rfc3339_now, Fields};

/// Severity of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// One log line as produced by the event logger.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: &'static str,
    pub fields: Fields,
}

/// Destination for log records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

const LEVEL_KEY: &str = "level";
const MSG_KEY: &str = "msg";
const TIME_KEY: &str = "time";

/// Writes each record as a single JSON line.
pub struct JsonLineSink<W> {
    writer: Mutex<W>,
}

impl JsonLineSink<Stdout> {
    /// Sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_record(&self, record: &LogRecord) -> io::Result<()> {
        let line = serde_json::to_vec(&render(record))?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl<W: Write + Send> LogSink for JsonLineSink<W> {
    fn emit(&self, record: &LogRecord) {
        if let Err(e) = self.write_record(record) {
            tracing::warn!(error = %e, record = record.message, "Failed to write log record");
        }
    }
}

/// Flatten a record into the JSON object written on the wire.
///
/// A record field named `level`, `msg` or `time` is kept as `fields.<key>`.
pub fn render(record: &LogRecord) -> Fields {
    let mut out = Fields::new();
    for (key, value) in &record.fields {
        match key.as_str() {
            LEVEL_KEY | MSG_KEY | TIME_KEY => {
                out.insert(format!("fields.{key}"), value.clone());
            }
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out.insert(LEVEL_KEY.into(), Value::from(record.severity.as_str()));
    out.insert(MSG_KEY.into(), Value::from(record.message));
    out.insert(TIME_KEY.into(), Value::from(rfc3339_now()));
    out
}

/// Forwards records to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let fields = Value::Object(record.fields.clone());
        match record.severity {
            Severity::Info => {
                tracing::info!(target: "event_log", fields = %fields, "{}", record.message)
            }
            Severity::Error => {
                tracing::error!(target: "event_log", fields = %fields, "{}", record.message)
            }
        }
    }
}
