//! OAuth client-credentials exchange and the credential cache.
//!
//! The reference behavior exchanged credentials on every listing call; here
//! the bearer is cached with explicit expiry tracking and re-exchanged only
//! when absent or expired. The configured margin is subtracted from the
//! stated lifetime so a token is never presented right at its deadline.

use crate::error::{PetfinderError, PetfinderResult};
use crate::http::HttpBackend;
use crate::models::{Config, TokenRequest, TokenResponse};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

struct CachedToken {
    bearer: String,
    expires_at: Instant,
}

/// Cache for the upstream bearer credential.
///
/// A single exchange is performed when the cache is empty or stale; there is
/// no retry on failure.
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::const_new(None),
        }
    }

    /// Return a valid bearer credential, exchanging credentials if needed.
    pub async fn bearer<B: HttpBackend>(
        &self,
        backend: &B,
        config: &Config,
    ) -> PetfinderResult<String> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if Instant::now() < cached.expires_at {
                return Ok(cached.bearer.clone());
            }
        }
        *slot = None;

        let credentials = config
            .credentials
            .as_ref()
            .ok_or(PetfinderError::MissingCredentials)?;

        debug!(url = %config.token_url, "exchanging client credentials for a bearer token");

        let request = TokenRequest::client_credentials(credentials);
        let response: TokenResponse = backend
            .post_json(&config.token_url, &request)
            .await
            .map_err(|e| match e {
                PetfinderError::ApiRequestFailed { status, .. } => {
                    PetfinderError::TokenExchangeFailed { status }
                }
                other => other,
            })?;

        let ttl = Duration::from_secs(response.expires_in)
            .saturating_sub(config.token_expiry_margin);
        *slot = Some(CachedToken {
            bearer: response.access_token.clone(),
            expires_at: Instant::now() + ttl,
        });

        Ok(response.access_token)
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
