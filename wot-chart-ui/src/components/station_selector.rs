//! Dropdown selector for choosing a monitoring station.

use crate::state::AppState;
use dioxus::prelude::*;
use wot_data::FilterEvent;

/// DOM id of the station `<select>`.
pub const STATION_SELECT_ID: &str = "station-select";

/// Station dropdown selector.
/// Lists every station in the dataset, sorted; a change resets the year.
#[component]
pub fn StationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let stations = state
        .dataset
        .read()
        .as_ref()
        .map(|ds| ds.station_options())
        .unwrap_or_default();
    let selected = state.filter.read().station().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.apply(FilterEvent::StationChanged(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: STATION_SELECT_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "Station: "
            }
            select {
                id: STATION_SELECT_ID,
                onchange: on_change,
                for station in stations.iter() {
                    option {
                        value: "{station}",
                        selected: *station == selected,
                        "{station}"
                    }
                }
            }
        }
    }
}
