//! Event logger.
//!
//! # Responsibilities
//! - Gate start/end records on the debug flag
//! - Emit error records unconditionally
//! - Emit once-only records at most once per event name
//!
//! # Design Decisions
//! - All state lives on an `EventLogger` value shared by reference or `Arc`
//! - The once-only check, emit and insert run under one lock
//! - Events are never evicted from the de-duplication set

use std::collections::HashSet;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::config::LoggingConfig;
use crate::events::fields::{
    merge_fields, rfc3339_now, Fields, CORRELATION_ID, ERROR, EVENT, STATUS, TIMESTAMP,
};
use crate::events::sink::{JsonLineSink, LogRecord, LogSink, Severity};

const STATUS_STARTED: &str = "started";
const STATUS_COMPLETED: &str = "completed";
const STATUS_ERROR: &str = "error";

/// Structured event logger with a debug gate and a once-only cache.
pub struct EventLogger {
    sink: Arc<dyn LogSink>,
    debug: AtomicBool,
    logged: Mutex<HashSet<String>>,
}

impl EventLogger {
    /// Create a logger writing to `sink`, with debug mode off.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            debug: AtomicBool::new(false),
            logged: Mutex::new(HashSet::new()),
        }
    }

    /// Create a logger writing JSON lines to stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(JsonLineSink::stdout()))
    }

    /// Create a logger with its debug mode taken from `config`.
    pub fn from_config(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        let logger = Self::new(sink);
        logger.set_debug_mode(config.debug);
        logger
    }

    /// Enable or disable start/end records.
    ///
    /// Intended to be called once at startup, before concurrent logging begins.
    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_mode(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Record the start of `event`. Returns `None` without emitting when debug mode is off.
    pub fn log_start(
        &self,
        correlation_id: &str,
        event: &str,
        extra: Option<&Fields>,
    ) -> Option<LogRecord> {
        self.log_relational(correlation_id, event, STATUS_STARTED, "Event started", extra)
    }

    /// Record the end of `event`. Returns `None` without emitting when debug mode is off.
    pub fn log_end(
        &self,
        correlation_id: &str,
        event: &str,
        extra: Option<&Fields>,
    ) -> Option<LogRecord> {
        self.log_relational(correlation_id, event, STATUS_COMPLETED, "Event completed", extra)
    }

    fn log_relational(
        &self,
        correlation_id: &str,
        event: &str,
        status: &str,
        message: &'static str,
        extra: Option<&Fields>,
    ) -> Option<LogRecord> {
        if !self.debug_mode() {
            return None;
        }

        let mut fields = Fields::new();
        fields.insert(EVENT.into(), Value::from(event));
        fields.insert(CORRELATION_ID.into(), Value::from(correlation_id));
        fields.insert(TIMESTAMP.into(), Value::from(rfc3339_now()));
        fields.insert(STATUS.into(), Value::from(status));

        let record = LogRecord {
            severity: Severity::Info,
            message,
            fields: merge_fields(fields, extra),
        };
        self.sink.emit(&record);
        Some(record)
    }

    /// Record a failure of `event`, regardless of debug mode.
    ///
    /// A missing error is logged with an empty `error` field.
    pub fn log_error(
        &self,
        correlation_id: &str,
        event: &str,
        err: Option<&dyn Error>,
        extra: Option<&Fields>,
    ) {
        let mut fields = Fields::new();
        fields.insert(EVENT.into(), Value::from(event));
        fields.insert(CORRELATION_ID.into(), Value::from(correlation_id));
        fields.insert(TIMESTAMP.into(), Value::from(rfc3339_now()));
        fields.insert(
            ERROR.into(),
            Value::from(err.map(|e| e.to_string()).unwrap_or_default()),
        );
        fields.insert(STATUS.into(), Value::from(STATUS_ERROR));

        self.sink.emit(&LogRecord {
            severity: Severity::Error,
            message: "Error occurred",
            fields: merge_fields(fields, extra),
        });
    }

    /// Log `event` the first time it is seen; later calls are no-ops.
    ///
    /// Returns `true` if this call emitted the record.
    pub fn log_once(&self, event: &str, err: Option<&dyn Error>, extra: Option<&Fields>) -> bool {
        self.emit_once(event, "Event logged once", err, extra)
    }

    /// Log a successful `event` the first time it is seen; shares the cache with [`log_once`].
    ///
    /// [`log_once`]: EventLogger::log_once
    pub fn log_success(&self, event: &str, extra: Option<&Fields>) -> bool {
        self.emit_once(event, "Event logged successfully", None, extra)
    }

    fn emit_once(
        &self,
        event: &str,
        message: &'static str,
        err: Option<&dyn Error>,
        extra: Option<&Fields>,
    ) -> bool {
        let mut logged = self.logged.lock().unwrap_or_else(PoisonError::into_inner);
        if logged.contains(event) {
            return false;
        }

        let mut fields = Fields::new();
        fields.insert(EVENT.into(), Value::from(event));
        fields.insert(TIMESTAMP.into(), Value::from(rfc3339_now()));
        if let Some(err) = err {
            fields.insert(ERROR.into(), Value::from(err.to_string()));
        }

        self.sink.emit(&LogRecord {
            severity: Severity::Info,
            message,
            fields: merge_fields(fields, extra),
        });
        logged.insert(event.to_string());
        true
    }

    /// Whether `event` has already produced its once-only record.
    pub fn has_logged(&self, event: &str) -> bool {
        self.logged
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(event)
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<LogRecord>>);

    impl LogSink for Recorder {
        fn emit(&self, record: &LogRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    impl Recorder {
        fn records(&self) -> Vec<LogRecord> {
            self.0.lock().unwrap().clone()
        }
    }

    fn logger() -> (EventLogger, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (EventLogger::new(recorder.clone()), recorder)
    }

    #[test]
    fn test_start_end_gated_by_debug() {
        let (logger, recorder) = logger();

        assert!(logger.log_start("cid", "sync", None).is_none());
        assert!(logger.log_end("cid", "sync", None).is_none());
        assert!(recorder.records().is_empty());

        logger.set_debug_mode(true);
        let start = logger.log_start("cid", "sync", None).unwrap();
        logger.log_start("cid", "sync", None).unwrap();
        let end = logger.log_end("cid", "sync", None).unwrap();

        assert_eq!(recorder.records().len(), 3);
        assert_eq!(start.fields["status"], "started");
        assert_eq!(start.message, "Event started");
        assert_eq!(end.fields["status"], "completed");
        assert_eq!(end.fields["correlationID"], "cid");
        assert_eq!(end.severity, Severity::Info);
    }

    #[test]
    fn test_extra_fields_override_reserved() {
        let (logger, _) = logger();
        logger.set_debug_mode(true);

        let extra = json!({"status": "override", "rows": 7});
        let record = logger.log_start("cid", "sync", extra.as_object()).unwrap();

        assert_eq!(record.fields["status"], "override");
        assert_eq!(record.fields["rows"], 7);
        assert_eq!(record.fields["event"], "sync");
    }

    #[test]
    fn test_error_ignores_debug() {
        let (logger, recorder) = logger();
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");

        logger.log_error("cid", "load", Some(&err), None);
        logger.log_error("cid", "load", Some(&err), None);

        let records = recorder.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[0].fields["error"], "missing");
        assert_eq!(records[0].fields["status"], "error");

        logger.set_debug_mode(true);
        logger.log_error("cid", "load", Some(&err), None);
        assert_eq!(recorder.records().len(), 3);
    }

    #[test]
    fn test_error_without_source() {
        let (logger, recorder) = logger();

        logger.log_error("cid", "load", None, None);

        let records = recorder.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields["error"], "");
    }

    #[test]
    fn test_log_once_emits_once() {
        let (logger, recorder) = logger();
        let err = io::Error::new(io::ErrorKind::Other, "boom");

        assert!(logger.log_once("cache-miss", Some(&err), None));
        assert!(!logger.log_once("cache-miss", None, None));
        assert!(!logger.log_success("cache-miss", None));

        let records = recorder.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields["error"], "boom");
        assert_eq!(records[0].message, "Event logged once");
        assert!(logger.has_logged("cache-miss"));
    }

    #[test]
    fn test_distinct_events_do_not_suppress() {
        let (logger, recorder) = logger();

        assert!(logger.log_success("a", None));
        assert!(logger.log_once("b", None, None));
        assert!(!logger.log_success("a", None));

        let records = recorder.records();
        assert_eq!(records.len(), 2);
        assert!(!records[1].fields.contains_key("error"));
        assert!(!logger.has_logged("c"));
    }

    #[test]
    fn test_from_config_sets_debug() {
        let config = LoggingConfig {
            debug: true,
            ..LoggingConfig::default()
        };
        let logger = EventLogger::from_config(&config, Arc::new(Recorder::default()));
        assert!(logger.debug_mode());
    }
}
