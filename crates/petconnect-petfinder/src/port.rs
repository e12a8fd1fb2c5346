//! Port trait implementation for `PetfinderClient`.
//!
//! This module implements the core-owned `AnimalCatalogPort` trait for
//! `PetfinderClient`, mapping internal errors to the catalog error taxonomy
//! at the boundary.

use async_trait::async_trait;
use petconnect_core::{Animal, AnimalCatalogPort, CatalogError, CatalogResult, PageQuery};

use crate::client::PetfinderClient;
use crate::error::PetfinderError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal `PetfinderError` to a core `CatalogError`.
fn map_error(err: PetfinderError) -> CatalogError {
    match err {
        PetfinderError::TokenExchangeFailed { status } => CatalogError::TokenAcquisition {
            message: format!("identity endpoint returned status {status}"),
        },
        PetfinderError::MissingCredentials => CatalogError::TokenAcquisition {
            message: "client credentials are not configured".to_string(),
        },
        PetfinderError::ApiRequestFailed { status, url } => CatalogError::Listing {
            status: Some(status),
            message: format!("status {status}: {url}"),
        },
        PetfinderError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        PetfinderError::InvalidUrl(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
        PetfinderError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        PetfinderError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> AnimalCatalogPort for PetfinderClient<B> {
    async fn list_page(&self, query: &PageQuery) -> CatalogResult<Vec<Animal>> {
        self.list_animals(query).await.map_err(map_error)
    }
}
