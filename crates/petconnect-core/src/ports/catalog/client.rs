//! Animal catalog port trait.

use super::error::CatalogResult;
use super::types::PageQuery;
use crate::domain::Animal;
use async_trait::async_trait;

/// Port trait for fetching pages of animal listings.
///
/// # Design
///
/// - Uses core-owned DTOs, not upstream API types
/// - Returns `CatalogError` for all failures
/// - Async because every implementation crosses the network
/// - Stateless contract: each call stands alone, with no session carried
///   between calls
#[async_trait]
pub trait AnimalCatalogPort: Send + Sync {
    /// Fetch one page of animal listings.
    ///
    /// The returned records are in catalog order and are not deduplicated
    /// against previous pages; that is the caller's concern.
    async fn list_page(&self, query: &PageQuery) -> CatalogResult<Vec<Animal>>;
}
