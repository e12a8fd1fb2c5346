//! Internal error types for Petfinder operations.
//!
//! These errors are internal to `petconnect-petfinder` and are mapped to the
//! core catalog port errors at the boundary.

use thiserror::Error;

/// Result type alias for Petfinder operations.
pub type PetfinderResult<T> = Result<T, PetfinderError>;

/// Errors related to Petfinder API operations.
#[derive(Debug, Error)]
pub enum PetfinderError {
    /// API request failed with an HTTP error status.
    #[error("Petfinder API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The identity endpoint refused or failed the token exchange.
    #[error("token exchange failed with status {status}")]
    TokenExchangeFailed {
        /// HTTP status code returned by the identity endpoint
        status: u16,
    },

    /// No client credentials were configured.
    #[error("client credentials are not configured")]
    MissingCredentials,

    /// API returned an invalid or unexpected response.
    #[error("invalid response from Petfinder API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
