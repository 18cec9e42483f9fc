//! Reusable Dioxus RSX components for the well depth chart.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod station_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use station_selector::{StationSelector, STATION_SELECT_ID};
pub use year_selector::{YearSelector, YEAR_SELECT_ID};
