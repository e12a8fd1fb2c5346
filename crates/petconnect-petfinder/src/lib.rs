#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod token;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPetfinderClient;

// Configuration
pub use config::{Credentials, PetfinderConfig};
