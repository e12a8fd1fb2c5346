//! Axum-specific error types and mappings.
//!
//! Maps the core catalog errors to HTTP status codes and the relay's JSON
//! error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petconnect_core::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// Relay-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error, including every upstream failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        // The relay's contract pins every upstream failure to a 500 with a
        // descriptive message; the taxonomy stays visible in the text.
        HttpError::Internal(err.to_string())
    }
}
