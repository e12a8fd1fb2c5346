//! Transport contract constants.
//!
//! String constants for the relay's HTTP surface, shared by the server, the
//! browsing client, and their tests. Keep these string-only with no
//! framework-specific types to avoid dependency creep.

pub mod http;
