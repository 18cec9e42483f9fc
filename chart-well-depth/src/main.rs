//! Average Well Water Depth Over Time
//!
//! A bar chart of one station's average well water depth for one year,
//! chosen with two dropdowns. The y-axis is scaled to the station's deepest
//! year, so stepping through years keeps the axis still.
//!
//! Data flow:
//! 1. On mount, `./well_depth.csv` (or a gzip of it) is fetched once and parsed.
//! 2. The station dropdown gets the sorted station list; the first station and
//!    its first year become the initial selection.
//! 3. Every selection change produces a new `FilterState`; the render effect
//!    reduces it to `ChartData` and hands it to the D3 chart, which updates
//!    the bars in place and rebuilds axes and overlay.

use dioxus::prelude::*;
use wot_chart::{render_chart, ChartConfig};
use wot_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, StationSelector, YearSelector,
};
use wot_chart_ui::js_bridge;
use wot_chart_ui::state::AppState;
use wot_data::FilterState;

/// Runtime-fetched well depth observations (served alongside WASM).
const WELL_DEPTH_CSV_URL: &str = "./well_depth.csv";

/// Layout and label overrides for the chart.
const CHART_CONFIG_JSON: &str = include_str!("../assets/chart-config.json");

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "well-depth-chart";

fn load_chart_config() -> ChartConfig {
    ChartConfig::from_json(CHART_CONFIG_JSON).unwrap_or_else(|e| {
        log::warn!("invalid chart-config.json, using defaults: {}", e);
        ChartConfig::default()
    })
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("well-depth-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(load_chart_config);
    let min_height = config.canvas_height() as u32;
    let config_json = use_hook(|| {
        js_bridge::init_charts();
        config.to_json().unwrap_or_else(|e| {
            log::error!("Failed to serialize chart config: {}", e);
            "{}".to_string()
        })
    });

    // Load the dataset once on mount
    use_effect(move || {
        spawn(async move {
            match js_bridge::load_dataset(WELL_DEPTH_CSV_URL).await {
                Ok(dataset) => {
                    let filter = FilterState::initial(&dataset);
                    log::info!(
                        "{} stations; initial selection {:?} / {:?}",
                        dataset.station_options().len(),
                        filter.station,
                        filter.year
                    );
                    state.filter.set(filter);
                    state.dataset.set(Some(dataset));
                }
                Err(e) => {
                    log::error!("Failed to load well depth data: {:#}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load well depth data: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Redraw whenever the dataset or the selection changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let Some(dataset) = state.dataset.read().clone() else {
            js_bridge::destroy_chart(CHART_ID);
            return;
        };
        let filter = (state.filter)();

        let data = render_chart(&dataset, &filter, &config);
        match data.to_json() {
            Ok(data_json) => js_bridge::render_well_depth_chart(CHART_ID, &data_json, &config_json),
            Err(e) => log::error!("Failed to serialize chart data: {}", e),
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Well Water Depth".to_string(),
                description: "Average depth to water in feet, per monitoring station and year".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    StationSelector {}
                    YearSelector {}
                }

                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: min_height,
                }
            }
        }
    }
}
