//! Error types for catalog port operations.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The upstream identity endpoint refused or failed the token exchange.
    #[error("upstream authorization failed: {message}")]
    TokenAcquisition {
        /// Description of the failure
        message: String,
    },

    /// The upstream listing call failed with an HTTP error status.
    #[error("upstream listing failed: {message}")]
    Listing {
        /// HTTP status code, when one was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Network or connectivity error.
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response body could not be understood.
    #[error("invalid catalog response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
