//! Correlation ID generation.

use uuid::Uuid;

/// Generate a new correlation ID (UUID v4, hyphenated).
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}
