#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{Address, Animal, Breeds, Contact, Photo};
pub use ports::{
    AnimalCatalogPort, CatalogError, CatalogResult, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageQuery,
};
