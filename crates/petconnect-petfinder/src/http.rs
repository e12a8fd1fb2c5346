//! HTTP backend abstraction for the Petfinder API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. There is no retry logic at this layer: a non-success
//! status or transport error fails the call immediately.

use crate::error::{PetfinderError, PetfinderResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends used by the Petfinder client.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code interacts with the
/// client through the `AnimalCatalogPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<B: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &B,
    ) -> PetfinderResult<T>;

    /// GET a URL with a bearer credential and deserialize the JSON response.
    async fn get_json_authorized<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        bearer: &str,
    ) -> PetfinderResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given user agent and timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    fn check_status(url: &Url, status: reqwest::StatusCode) -> PetfinderResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(PetfinderError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &B,
    ) -> PetfinderResult<T> {
        let response = self.client.post(url.as_str()).json(body).send().await?;
        Self::check_status(url, response.status())?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn get_json_authorized<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        bearer: &str,
    ) -> PetfinderResult<T> {
        let response = self
            .client
            .get(url.as_str())
            .header("Authorization", format!("Bearer {bearer}"))
            .send()
            .await?;
        Self::check_status(url, response.status())?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
