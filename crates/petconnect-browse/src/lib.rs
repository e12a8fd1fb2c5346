#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod adoption;
mod filter;
mod relay;
mod session;
mod view;

// ============================================================================
// Public API
// ============================================================================

pub use adoption::{AdoptionForm, FormField};
pub use filter::{FilterCriteria, FilterField};
pub use relay::{RelayConfig, RelaySource};
pub use session::{BrowseSession, DetailView, ViewMode};
pub use view::{BrowseView, ListState};
