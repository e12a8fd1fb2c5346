//! Public configuration for the Petfinder client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// OAuth client credentials for the upstream identity endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client identifier issued by the upstream.
    pub client_id: String,
    /// Client secret issued by the upstream.
    pub client_secret: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Configuration for the Petfinder client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use petconnect_petfinder::{Credentials, PetfinderConfig};
/// use std::time::Duration;
///
/// let config = PetfinderConfig::new()
///     .with_credentials(Credentials::new("id", "secret"))
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct PetfinderConfig {
    /// Base URL for the Petfinder API
    pub(crate) base_url: String,
    /// Override for the token endpoint; derived from `base_url` when unset
    pub(crate) token_url: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Client credentials; listing calls fail at token acquisition when unset
    pub(crate) credentials: Option<Credentials>,
    /// How long before its stated expiry a cached token stops being reused
    pub(crate) token_expiry_margin: Duration,
}

impl Default for PetfinderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.petfinder.com/v2".to_string(),
            token_url: None,
            user_agent: concat!("petconnect-petfinder/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            credentials: None,
            token_expiry_margin: Duration::from_secs(60),
        }
    }
}

impl PetfinderConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Petfinder API.
    ///
    /// Defaults to `https://api.petfinder.com/v2`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the token endpoint URL.
    ///
    /// Defaults to `{base_url}/oauth2/token`.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
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

    /// Set the client credentials for the token exchange.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set optional client credentials.
    #[must_use]
    pub fn with_optional_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set how long before its stated expiry a cached token is retired.
    ///
    /// Defaults to 60 seconds. Setting the margin to at least the token's
    /// lifetime forces a fresh exchange on every call.
    #[must_use]
    pub const fn with_token_expiry_margin(mut self, margin: Duration) -> Self {
        self.token_expiry_margin = margin;
        self
    }
}
