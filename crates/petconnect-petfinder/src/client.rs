//! Petfinder client for fetching animal listings.
//!
//! Each listing call obtains a bearer credential (from the cache or a fresh
//! exchange), issues the listing request with the credential attached, and
//! returns the parsed records unchanged.

use crate::config::PetfinderConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{AnimalsEnvelope, Config, derive_token_url};
use crate::token::TokenCache;
use crate::url::build_animals_url;
use petconnect_core::{Animal, PageQuery};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Petfinder client using the reqwest HTTP backend.
pub type DefaultPetfinderClient = PetfinderClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Petfinder catalog API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPetfinderClient` for production code; external code consumes
/// it through the `AnimalCatalogPort` trait.
pub struct PetfinderClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: Config,
    pub(crate) token: TokenCache,
}

impl DefaultPetfinderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &PetfinderConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&config.user_agent, config.timeout);
        Self {
            backend,
            config: internal_config,
            token: TokenCache::new(),
        }
    }

    fn to_internal_config(config: &PetfinderConfig) -> Config {
        let base_url = Url::parse(&config.base_url).unwrap_or_else(|_| {
            Url::parse("https://api.petfinder.com/v2").expect("default URL is valid")
        });
        let token_url = config
            .token_url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
            .unwrap_or_else(|| derive_token_url(&base_url));

        Config {
            base_url,
            token_url,
            credentials: config.credentials.clone(),
            token_expiry_margin: config.token_expiry_margin,
        }
    }
}

impl<B: HttpBackend> PetfinderClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: Config, backend: B) -> Self {
        Self {
            backend,
            config,
            token: TokenCache::new(),
        }
    }

    /// Fetch one page of animal listings from the upstream catalog.
    pub(crate) async fn list_animals(
        &self,
        query: &PageQuery,
    ) -> crate::error::PetfinderResult<Vec<Animal>> {
        let bearer = self.token.bearer(&self.backend, &self.config).await?;

        let url = build_animals_url(&self.config, query);
        let envelope: AnimalsEnvelope = self.backend.get_json_authorized(&url, &bearer).await?;

        Ok(envelope.animals)
    }
}
