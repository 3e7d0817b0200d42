//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! two client errors the server defines. All other unexpected statuses land
//! in `HttpError` with the raw status code and body for debugging.

use serde::Deserialize;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the todo (or route) does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 with its explanation.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Shape of the server's error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
