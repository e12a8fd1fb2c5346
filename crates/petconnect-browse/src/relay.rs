//! HTTP source adapter for the relay service.
//!
//! Implements [`AnimalCatalogPort`] against the relay's `/pets` endpoint so
//! a [`crate::BrowseSession`] can pull pages over the wire. Route and
//! parameter names come from the shared contract constants.

use async_trait::async_trait;
use petconnect_core::contracts::http::{PARAM_LIMIT, PARAM_PAGE, PETS_PATH};
use petconnect_core::{Animal, AnimalCatalogPort, CatalogError, CatalogResult, PageQuery};
use std::time::Duration;
use url::Url;

/// Configuration for the relay source.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the relay service
    pub(crate) base_url: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RelayConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the relay service.
    ///
    /// Defaults to `http://localhost:5000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Catalog source backed by the relay service.
pub struct RelaySource {
    client: reqwest::Client,
    base_url: Url,
}

impl RelaySource {
    /// Create a source from the given configuration.
    pub fn new(config: &RelayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");
        let base_url = Url::parse(&config.base_url).unwrap_or_else(|_| {
            Url::parse("http://localhost:5000").expect("default relay URL is valid")
        });

        Self { client, base_url }
    }
}

/// Build the relay listing URL for one page.
fn build_pets_url(base_url: &Url, query: &PageQuery) -> Url {
    let mut url = base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{PETS_PATH}"));
    url.set_query(Some(&format!(
        "{PARAM_LIMIT}={}&{PARAM_PAGE}={}",
        query.limit, query.page
    )));
    url
}

#[async_trait]
impl AnimalCatalogPort for RelaySource {
    async fn list_page(&self, query: &PageQuery) -> CatalogResult<Vec<Animal>> {
        let url = build_pets_url(&self.base_url, query);

        let response =
            self.client
                .get(url.as_str())
                .send()
                .await
                .map_err(|e| CatalogError::Network {
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Listing {
                status: Some(status.as_u16()),
                message: format!("relay returned status {status}"),
            });
        }

        response
            .json::<Vec<Animal>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse {
                message: e.to_string(),
            })
    }
}
