//! The browsing session state machine.
//!
//! All application state lives here and is mutated only through the named
//! operations below, so transitions stay deterministic and testable without
//! a rendering framework. Operations take `&mut self`; overlapping fetches
//! cannot interleave within one session.

use crate::adoption::{AdoptionForm, FormField};
use crate::filter::{FilterCriteria, FilterField};
use petconnect_core::{Animal, AnimalCatalogPort, CatalogResult, PageQuery};
use serde::Serialize;
use tracing::warn;

/// Which set of records the list view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    /// The accumulated list, restricted by the active filters.
    #[default]
    All,
    /// The favorites list; filters are not consulted.
    FavoritesOnly,
}

/// The record currently in focus, with its optional adoption sub-form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailView {
    pub animal: Animal,
    /// Present while the adoption form is open.
    pub form: Option<AdoptionForm>,
}

/// The browsing client's state machine.
///
/// Generic over the catalog source so tests can script pages without a
/// network. In production the source is a [`crate::RelaySource`].
pub struct BrowseSession<S: AnimalCatalogPort> {
    source: S,
    page_size: u32,

    pub(crate) animals: Vec<Animal>,
    pub(crate) page: u32,
    pub(crate) loading: bool,
    pub(crate) filter: FilterCriteria,
    pub(crate) favorites: Vec<Animal>,
    pub(crate) mode: ViewMode,
    pub(crate) detail: Option<DetailView>,
}

impl<S: AnimalCatalogPort> BrowseSession<S> {
    /// Create a session over a catalog source.
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            animals: Vec::new(),
            page: 1,
            loading: false,
            filter: FilterCriteria::default(),
            favorites: Vec::new(),
            mode: ViewMode::All,
            detail: None,
        }
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    /// Fetch one page from the source and merge it into the accumulated
    /// list.
    ///
    /// On success the page counter advances to `page`. On failure the
    /// accumulated list, page counter and favorites are left untouched; the
    /// loading flag clears on both paths.
    pub async fn fetch_page(&mut self, page: u32) -> CatalogResult<()> {
        let query = PageQuery::new(page, self.page_size);

        self.loading = true;
        let result = self.source.list_page(&query).await;
        self.loading = false;

        match result {
            Ok(batch) => {
                self.merge(batch);
                self.page = query.page;
                Ok(())
            }
            Err(e) => {
                warn!(page = query.page, error = %e, "failed to fetch animal listings");
                Err(e)
            }
        }
    }

    /// Fetch the page after the current one.
    pub async fn load_more(&mut self) -> CatalogResult<()> {
        self.fetch_page(self.page + 1).await
    }

    /// Whether offering "load more" makes sense: only in All mode, and only
    /// while the filtered view still fills a whole page (the heuristic that
    /// more records may exist).
    pub fn can_load_more(&self) -> bool {
        self.mode == ViewMode::All && self.filtered().count() >= self.page_size as usize
    }

    /// Merge a fetched batch, skipping records whose identifier is already
    /// present. First occurrence wins, so accumulated order is stable when
    /// pages overlap.
    fn merge(&mut self, batch: Vec<Animal>) {
        for animal in batch {
            if !self.animals.iter().any(|a| a.id == animal.id) {
                self.animals.push(animal);
            }
        }
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Replace the value of a single filter field.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filter.set(field, value);
    }

    /// Reset all filter fields to empty.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub(crate) fn filtered(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(|a| self.filter.matches(a))
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Add the record to the favorites, or remove it if already present.
    pub fn toggle_favorite(&mut self, animal: &Animal) {
        if let Some(pos) = self.favorites.iter().position(|f| f.id == animal.id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(animal.clone());
        }
    }

    /// Whether a record is currently favorited.
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }

    /// Show the accumulated, filtered list.
    pub fn show_all(&mut self) {
        self.mode = ViewMode::All;
    }

    /// Show only the favorites.
    pub fn show_favorites(&mut self) {
        self.mode = ViewMode::FavoritesOnly;
    }

    // ------------------------------------------------------------------
    // Detail view and adoption form
    // ------------------------------------------------------------------

    /// Put a record in focus, discarding any previous selection and any
    /// in-progress adoption form.
    pub fn select_detail(&mut self, animal: &Animal) {
        self.detail = Some(DetailView {
            animal: animal.clone(),
            form: None,
        });
    }

    /// Clear the detail view.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Open the adoption form for the focused record with a fresh draft.
    ///
    /// Without a detail selection this is a no-op.
    pub fn open_adoption_form(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.form = Some(AdoptionForm::default());
        }
    }

    /// Replace the value of a single adoption-form field.
    pub fn set_adoption_field(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(form) = self.detail.as_mut().and_then(|d| d.form.as_mut()) {
            form.set(field, value);
        }
    }

    /// Submit the adoption form; `true` when the draft was complete and
    /// accepted. Local-only, nothing is transmitted.
    pub fn submit_adoption_form(&mut self) -> bool {
        self.detail
            .as_mut()
            .and_then(|d| d.form.as_mut())
            .is_some_and(AdoptionForm::submit)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The accumulated list, in merge order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// The current page counter.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The active filter criteria.
    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// The favorites, in the order they were added.
    pub fn favorites(&self) -> &[Animal] {
        &self.favorites
    }

    /// The active view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The record currently in focus, if any.
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }
}
