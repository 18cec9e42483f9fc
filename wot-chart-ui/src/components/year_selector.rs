//! Dropdown selector for choosing a year of the selected station.

use crate::state::AppState;
use dioxus::prelude::*;
use wot_data::FilterEvent;

/// DOM id of the year `<select>`.
pub const YEAR_SELECT_ID: &str = "year-select";

/// Year dropdown selector.
/// Options are recomputed from the dataset for the current station on every render.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let filter = state.filter.read().clone();
    let years = state
        .dataset
        .read()
        .as_ref()
        .map(|ds| filter.year_options(ds))
        .unwrap_or_default();
    let selected = filter.year.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.apply(FilterEvent::YearChanged(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: YEAR_SELECT_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "Year: "
            }
            select {
                id: YEAR_SELECT_ID,
                onchange: on_change,
                disabled: years.is_empty(),
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
