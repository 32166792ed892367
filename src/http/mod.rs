//! HTTP response helpers.
//!
//! # Data Flow
//! ```text
//! handler result
//!     → response.rs (serialize payload or error envelope)
//!     → axum Response (Content-Type, status, JSON body)
//! ```

pub mod response;

pub use response::{respond_with_error, respond_with_success, ApiError, ErrResponse};
