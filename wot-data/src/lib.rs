//! Core types for the well-over-time charts.
//!
//! - `record`: the `WellDepth` observation and its CSV parser
//! - `source`: plain or gzip-compressed CSV bytes to text
//! - `dataset`: the immutable record set and its derived option lists
//! - `filter`: the (station, year) selection and the control events that replace it

pub mod dataset;
pub mod error;
pub mod filter;
pub mod record;
pub mod source;

pub use dataset::Dataset;
pub use error::{Result, WellDataError};
pub use filter::{FilterEvent, FilterState};
pub use record::WellDepth;
