//! What one render of the chart shows.
//!
//! [`render_chart`] reduces the dataset and the current selection to the
//! values the drawing layer needs: the bars for the selected (station, year),
//! the years forming the x-domain, and the upper bound of the y-domain. Scales,
//! axes and element layout are left to the drawing layer.

use crate::config::ChartConfig;
use serde::Serialize;
use wot_data::{Dataset, FilterState};

/// Upper bound of the y-domain when the station has no usable depth.
pub const DEFAULT_Y_MAX: f64 = 1.0;

/// One bar: a filtered record's year and depth.
///
/// A NaN depth is kept and serializes as `null`; it draws nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub year: String,
    pub depth: f64,
}

impl BarDatum {
    pub fn is_drawable(&self) -> bool {
        self.depth.is_finite()
    }
}

/// Inputs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub station: Option<String>,
    pub year: Option<String>,
    /// Distinct years of the filtered records, in record order.
    pub years: Vec<String>,
    /// The y-domain is `[0, y_max]`.
    pub y_max: f64,
    /// One entry per filtered record, duplicates included.
    pub bars: Vec<BarDatum>,
}

impl ChartData {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the chart inputs for the current selection.
///
/// `y_max` is the station's maximum depth over all of its years times
/// `config.headroom`, so switching years never rescales the axis. An unset
/// year or unknown station yields no bars.
pub fn render_chart(dataset: &Dataset, filter: &FilterState, config: &ChartConfig) -> ChartData {
    let filtered = match (filter.station.as_deref(), filter.year.as_deref()) {
        (Some(station), Some(year)) => dataset.filtered(station, year),
        _ => Vec::new(),
    };

    let y_max = filter
        .station
        .as_deref()
        .and_then(|s| dataset.station_max_depth(s))
        .map(|max| max * config.headroom)
        .unwrap_or(DEFAULT_Y_MAX);

    let mut years: Vec<String> = Vec::new();
    for record in &filtered {
        if !years.contains(&record.year) {
            years.push(record.year.clone());
        }
    }

    let bars: Vec<BarDatum> = filtered
        .into_iter()
        .map(|r| BarDatum {
            year: r.year,
            depth: r.avg_water_depth_ft,
        })
        .collect();

    log::debug!(
        "chart for station {:?} year {:?}: {} bars, y-domain [0, {}]",
        filter.station,
        filter.year,
        bars.len(),
        y_max
    );

    ChartData {
        station: filter.station.clone(),
        year: filter.year.clone(),
        years,
        y_max,
        bars,
    }
}
