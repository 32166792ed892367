//! Log field sets and merging.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// A flat key-value field set attached to one log record.
pub type Fields = Map<String, Value>;

/// Reserved field keys written by the event logger.
pub const EVENT: &str = "event";
pub const CORRELATION_ID: &str = "correlationID";
pub const TIMESTAMP: &str = "timestamp";
pub const STATUS: &str = "status";
pub const ERROR: &str = "error";

/// Merge `extra` into `base`. Values from `extra` win on key collision.
pub fn merge_fields(mut base: Fields, extra: Option<&Fields>) -> Fields {
    if let Some(extra) = extra {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

/// Current UTC time in RFC 3339 with second precision (`2024-05-01T12:00:00Z`).
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
