//! Relay HTTP route constants.

/// Animal listing endpoint.
pub const PETS_PATH: &str = "/pets";

/// Liveness probe endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Query parameter carrying the page size.
pub const PARAM_LIMIT: &str = "limit";

/// Query parameter carrying the 1-based page number.
pub const PARAM_PAGE: &str = "page";
