//! Relay server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together:
//! the upstream Petfinder client is instantiated here and everything else
//! sees it as an `AnimalCatalogPort` trait object.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use petconnect_core::{AnimalCatalogPort, DEFAULT_PAGE_SIZE};
use petconnect_petfinder::{Credentials, DefaultPetfinderClient, PetfinderConfig};
use tracing::{info, warn};

/// CORS configuration for the relay server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the relay.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Page size used when a request does not specify a limit.
    pub page_size: u32,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Upstream catalog client configuration.
    pub petfinder: PetfinderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            page_size: DEFAULT_PAGE_SIZE,
            cors: CorsConfig::default(),
            petfinder: PetfinderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    ///
    /// Missing credentials do not fail startup; every listing request then
    /// fails at the token-acquisition step instead.
    pub fn from_env() -> Self {
        let port = env_or("PETCONNECT_PORT", 5000);
        let page_size = env_or("PETCONNECT_PAGE_SIZE", DEFAULT_PAGE_SIZE);

        let credentials = match (
            env::var("PETFINDER_CLIENT_ID"),
            env::var("PETFINDER_CLIENT_SECRET"),
        ) {
            (Ok(id), Ok(secret)) => Some(Credentials::new(id, secret)),
            _ => {
                warn!(
                    "PETFINDER_CLIENT_ID / PETFINDER_CLIENT_SECRET not set; \
                     listing requests will fail at token acquisition"
                );
                None
            }
        };

        let mut petfinder = PetfinderConfig::new().with_optional_credentials(credentials);
        if let Ok(base_url) = env::var("PETFINDER_API_URL") {
            petfinder = petfinder.with_base_url(base_url);
        }

        Self {
            port,
            page_size,
            cors: CorsConfig::default(),
            petfinder,
        }
    }
}

/// Read an environment variable, falling back to a default when it is
/// missing or unparsable.
fn env_or<T: FromStr + Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid {key} value {raw:?}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Application context for the relay server.
pub struct RelayContext {
    /// The upstream catalog, behind the core port.
    pub catalog: Arc<dyn AnimalCatalogPort>,
    /// Page size used when a request does not specify a limit.
    pub page_size: u32,
}

impl RelayContext {
    /// Build a context over any catalog implementation.
    ///
    /// Tests use this to inject a stub catalog.
    pub fn new(catalog: Arc<dyn AnimalCatalogPort>, page_size: u32) -> Self {
        Self { catalog, page_size }
    }
}

/// Bootstrap the relay with the production upstream client.
pub fn bootstrap(config: &ServerConfig) -> RelayContext {
    let catalog: Arc<dyn AnimalCatalogPort> =
        Arc::new(DefaultPetfinderClient::new(&config.petfinder));
    RelayContext::new(catalog, config.page_size)
}

/// Start the relay server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("petconnect relay listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
