//! Domain types for the petconnect system.

mod animal;

pub use animal::{Address, Animal, Breeds, Contact, Photo};
