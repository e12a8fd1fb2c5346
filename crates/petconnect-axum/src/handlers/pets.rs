//! Pet listing handler - the relay's single operation.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use petconnect_core::{Animal, AnimalCatalogPort as _, PageQuery};

/// Query parameters accepted by `GET /pets`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Records per page; defaults to the configured page size.
    pub limit: Option<u32>,
    /// 1-based page number; defaults to 1.
    pub page: Option<u32>,
}

/// List one page of adoptable animals.
///
/// The page number and limit are forwarded to the upstream catalog and the
/// returned records pass through unchanged.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Animal>>, HttpError> {
    let query = PageQuery::new(
        params.page.unwrap_or(1),
        params.limit.unwrap_or(state.page_size),
    );

    let animals = state.catalog.list_page(&query).await?;
    Ok(Json(animals))
}
