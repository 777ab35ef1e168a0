//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `InvalidInput` get their own variants because callers act
//! on them (drop a stale row, show a form error). Every other unexpected
//! status lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400, carrying its error message.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
