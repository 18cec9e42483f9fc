//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wot_data::{Dataset, FilterEvent, FilterState};

/// Shared application state for the well depth chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded observations (None until the CSV arrives)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current station and year selection
    pub filter: Signal<FilterState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(FilterState::default()),
        }
    }

    /// Replace the filter with the state that follows `event`.
    ///
    /// Ignored until the dataset has loaded.
    pub fn apply(&mut self, event: FilterEvent) {
        let Some(dataset) = self.dataset.peek().clone() else {
            log::warn!("ignoring {:?}: dataset not loaded", event);
            return;
        };
        let next = self.filter.peek().apply(&dataset, event);
        self.filter.set(next);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
