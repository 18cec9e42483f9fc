//! The (station, year) selection driving each redraw.
//!
//! `FilterState` is a value: control handlers build a new one with
//! [`FilterState::apply`] and hand it to the renderer. Year options are never
//! stored here; they are recomputed from the dataset whenever the station
//! changes, and the year is reset to the first of them.

use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// A change notification from one of the two selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    StationChanged(String),
    YearChanged(String),
}

/// Currently selected station and year.
///
/// Both are `None` before the dataset loads. `year` is also `None` when the
/// selected station has no records, which renders as an empty chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub station: Option<String>,
    pub year: Option<String>,
}

impl FilterState {
    /// Default selection after load: the first station and its first year.
    pub fn initial(dataset: &Dataset) -> Self {
        match dataset.station_options().into_iter().next() {
            Some(station) => Self::for_station(dataset, station),
            None => Self::default(),
        }
    }

    /// Select `station` and reset the year to its first available year.
    pub fn for_station(dataset: &Dataset, station: impl Into<String>) -> Self {
        let station = station.into();
        let year = dataset.year_options(&station).into_iter().next();
        Self {
            station: Some(station),
            year,
        }
    }

    /// Produce the state that follows `event`.
    ///
    /// A station change re-derives the year options. A year change keeps the
    /// station; a year not offered for that station falls back to the first
    /// offered year.
    pub fn apply(&self, dataset: &Dataset, event: FilterEvent) -> Self {
        match event {
            FilterEvent::StationChanged(station) => {
                log::debug!("station changed to {:?}", station);
                Self::for_station(dataset, station)
            }
            FilterEvent::YearChanged(year) => {
                let options = self.year_options(dataset);
                let year = if options.contains(&year) {
                    Some(year)
                } else {
                    log::warn!(
                        "year {:?} not offered for station {:?}; using first option",
                        year,
                        self.station
                    );
                    options.into_iter().next()
                };
                Self {
                    station: self.station.clone(),
                    year,
                }
            }
        }
    }

    /// Year options for the selected station (empty if none is selected).
    pub fn year_options(&self, dataset: &Dataset) -> Vec<String> {
        self.station
            .as_deref()
            .map(|s| dataset.year_options(s))
            .unwrap_or_default()
    }

    pub fn station(&self) -> &str {
        self.station.as_deref().unwrap_or("")
    }
}
