//! The derived view of a browsing session.
//!
//! `snapshot` is a pure function of session state: the accumulated list,
//! the favorites selection, the filter criteria and the view-mode toggle
//! fully determine what is rendered. No other state can affect the view.

use crate::session::{BrowseSession, DetailView, ViewMode};
use petconnect_core::{Animal, AnimalCatalogPort};
use serde::Serialize;

/// What the list area shows.
///
/// The loading check precedes the empty check: an empty list is reported as
/// `Loading`, not `Empty`, while a fetch is in flight. Zero favorites and
/// zero filtered matches both yield `Empty` and are indistinguishable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ListState {
    /// A fetch is in flight; the list is suppressed.
    Loading,
    /// Nothing to show.
    Empty,
    /// Records to render, in display order.
    Animals(Vec<Animal>),
}

/// A renderable snapshot of the session.
#[derive(Clone, Debug, Serialize)]
pub struct BrowseView {
    pub mode: ViewMode,
    pub loading: bool,
    pub list: ListState,
    pub favorites_count: usize,
    pub can_load_more: bool,
    /// The focused record and its adoption form, when open.
    pub detail: Option<DetailView>,
}

impl<S: AnimalCatalogPort> BrowseSession<S> {
    /// Derive the current view.
    pub fn snapshot(&self) -> BrowseView {
        let displayed: Vec<Animal> = match self.mode {
            ViewMode::FavoritesOnly => self.favorites.clone(),
            ViewMode::All => self.filtered().cloned().collect(),
        };

        let list = if self.loading {
            ListState::Loading
        } else if displayed.is_empty() {
            ListState::Empty
        } else {
            ListState::Animals(displayed)
        };

        BrowseView {
            mode: self.mode,
            loading: self.loading,
            list,
            favorites_count: self.favorites.len(),
            can_load_more: self.can_load_more(),
            detail: self.detail.clone(),
        }
    }
}
