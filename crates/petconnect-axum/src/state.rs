//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and the router.

use crate::bootstrap::RelayContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped [`RelayContext`] holding the upstream catalog
/// port and the configured page size.
pub type AppState = Arc<RelayContext>;
