//! Well depth bar chart data.
//!
//! This crate provides:
//! - `config`: every layout constant and label, loadable from JSON
//! - `chart`: the per-render chart inputs (filtered bars, x-domain years and
//!   the station's padded maximum), serialized as JSON for the drawing layer

pub mod chart;
pub mod config;

pub use chart::{render_chart, BarDatum, ChartData, DEFAULT_Y_MAX};
pub use config::ChartConfig;
