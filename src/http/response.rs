//! JSON response formatting.
//!
//! # Responsibilities
//! - Write standardized `{"error": {...}}` bodies
//! - Write success payloads verbatim as JSON
//!
//! # Design Decisions
//! - `Content-Type` is set before the status and body
//! - A payload that fails to serialize becomes a 500 error body

use std::error::Error;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error details nested under the top-level `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrResponse {
    pub code: u16,
    pub reason: String,
    pub message: String,
    pub error_code: String,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ErrResponse,
}

/// Build a JSON error response.
pub fn respond_with_error(
    status: StatusCode,
    message: &str,
    err: &dyn Error,
    trace_id: &str,
) -> Response {
    let body = ErrResponse {
        code: status.as_u16(),
        reason: err.to_string(),
        message: message.to_string(),
        error_code: trace_id.to_string(),
    };

    match serde_json::to_vec(&ErrorEnvelope { error: &body }) {
        Ok(bytes) => json_response(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, trace_id = %trace_id, "Failed to encode error response");
            json_response(status, Vec::new())
        }
    }
}

/// Build a JSON success response from any serializable payload.
pub fn respond_with_success<T: Serialize + ?Sized>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_vec(data) {
        Ok(bytes) => json_response(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, status = %status, "Failed to encode response");
            respond_with_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to encode response",
                &e,
                "",
            )
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    *response.status_mut() = status;
    response
}

/// Handler error rendered through [`respond_with_error`].
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    #[source]
    pub source: Box<dyn Error + Send + Sync>,
    pub trace_id: String,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            source: source.into(),
            trace_id: trace_id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        respond_with_error(self.status, &self.message, &*self.source, &self.trace_id)
    }
}
