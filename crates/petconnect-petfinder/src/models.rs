//! Internal API wire types for the Petfinder API.
//!
//! These types are internal to `petconnect-petfinder` and are not exposed to
//! consumers. External consumers receive the core `Animal` DTOs.

use crate::config::Credentials;
use petconnect_core::Animal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Internal configuration for the Petfinder client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the Petfinder API
    pub base_url: Url,
    /// Resolved token endpoint URL
    pub token_url: Url,
    /// Client credentials, when configured
    pub credentials: Option<Credentials>,
    /// How long before its stated expiry a cached token is retired
    pub token_expiry_margin: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let base_url =
            Url::parse("https://api.petfinder.com/v2").expect("default API URL is valid");
        let token_url = derive_token_url(&base_url);
        Self {
            base_url,
            token_url,
            credentials: None,
            token_expiry_margin: Duration::from_secs(60),
        }
    }
}

/// Derive the token endpoint from the API base URL.
pub fn derive_token_url(base_url: &Url) -> Url {
    let mut url = base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/oauth2/token"));
    url
}

// ============================================================================
// Token Exchange
// ============================================================================

/// Request body for the client-credentials grant.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> TokenRequest<'a> {
    /// Build a client-credentials request for the given credential pair.
    pub fn client_credentials(credentials: &'a Credentials) -> Self {
        Self {
            grant_type: "client_credentials",
            client_id: credentials.client_id.as_str(),
            client_secret: credentials.client_secret.as_str(),
        }
    }
}

/// Response from the identity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer credential to present on listing calls.
    pub access_token: String,
    /// Lifetime of the credential in seconds.
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

const fn default_expires_in() -> u64 {
    3600
}

// ============================================================================
// Listings
// ============================================================================

/// Envelope the upstream wraps around the animal array.
///
/// Envelope fields other than `animals` (pagination metadata and the like)
/// are ignored on input.
#[derive(Debug, Deserialize)]
pub struct AnimalsEnvelope {
    pub animals: Vec<Animal>,
}
