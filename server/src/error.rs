//! Error types for store operations and their HTTP mapping.
//!
//! # Design
//! Store operations fail in exactly two ways: bad input on create and an
//! unknown id on update. The HTTP layer adds one more, a path id that is not
//! an integer. All are client errors; `IntoResponse` turns them into a status
//! code plus a `{"error": "..."}` body so handlers can use `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    /// The request body was missing, unreadable, or had no usable `text`.
    #[error("{0}")]
    Validation(String),

    /// No todo with this id exists.
    #[error("Todo not found")]
    NotFound(u64),

    /// The `{id}` path segment did not parse as a todo id.
    #[error("Not found")]
    BadPath,
}

impl TodoError {
    pub fn missing_text() -> Self {
        Self::Validation("Missing text field".to_string())
    }

    pub fn invalid_text() -> Self {
        Self::Validation("Todo text must be a string".to_string())
    }

    pub fn empty_text() -> Self {
        Self::Validation("Todo text cannot be empty".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound(_) | TodoError::BadPath => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
