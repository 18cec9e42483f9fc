use crate::error::Result;
use crate::record::{parse_well_depth_csv, WellDepth};
use crate::source::decode_source;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The full set of well depth observations, immutable after load.
///
/// Cheaply cloneable (via `Rc`) so it can live in a Dioxus signal and be
/// handed to the renderer on every redraw in a single-threaded WASM page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Rc<Vec<WellDepth>>,
}

impl From<Vec<WellDepth>> for Dataset {
    fn from(records: Vec<WellDepth>) -> Self {
        Self {
            records: Rc::new(records),
        }
    }
}

impl Dataset {
    /// Parse a CSV string into a dataset.
    pub fn from_csv(csv_data: &str) -> Result<Self> {
        Ok(parse_well_depth_csv(csv_data)?.into())
    }

    /// Decode plain or gzip bytes, then parse them as CSV.
    pub fn from_source(bytes: &[u8]) -> Result<Self> {
        Self::from_csv(&decode_source(bytes)?)
    }

    pub fn records(&self) -> &[WellDepth] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for one station, in source order.
    pub fn station_records<'a>(&'a self, station: &'a str) -> impl Iterator<Item = &'a WellDepth> + 'a {
        self.records.iter().filter(move |r| r.station == station)
    }

    /// Distinct station names across the whole dataset, sorted ascending.
    pub fn station_options(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.station.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Distinct years recorded for `station`, sorted ascending.
    ///
    /// Empty when the station has no records.
    pub fn year_options(&self, station: &str) -> Vec<String> {
        self.station_records(station)
            .map(|r| r.year.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Records matching both station and year.
    ///
    /// Normally one record, but every match is returned if the source
    /// repeats a (station, year) pair.
    pub fn filtered(&self, station: &str, year: &str) -> Vec<WellDepth> {
        self.station_records(station)
            .filter(|r| r.year == year)
            .cloned()
            .collect()
    }

    /// Largest depth across every year of `station`.
    ///
    /// NaN depths are skipped; `None` when no depth remains.
    pub fn station_max_depth(&self, station: &str) -> Option<f64> {
        self.station_records(station)
            .map(|r| r.avg_water_depth_ft)
            .filter(|d| !d.is_nan())
            .fold(None, |max, d| match max {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        vec![
            WellDepth::new("A", "2020", 10.0),
            WellDepth::new("A", "2021", 12.0),
            WellDepth::new("B", "2020", 5.0),
        ]
        .into()
    }

    #[test]
    fn station_options_are_sorted_and_distinct() {
        let ds: Dataset = vec![
            WellDepth::new("Pine", "2020", 1.0),
            WellDepth::new("Elm", "2020", 1.0),
            WellDepth::new("Pine", "2021", 1.0),
            WellDepth::new("Ash", "2019", 1.0),
        ]
        .into();
        assert_eq!(ds.station_options(), vec!["Ash", "Elm", "Pine"]);
    }

    #[test]
    fn year_options_only_cover_the_station() {
        let ds = sample();
        assert_eq!(ds.year_options("A"), vec!["2020", "2021"]);
        assert_eq!(ds.year_options("B"), vec!["2020"]);
        assert!(ds.year_options("Z").is_empty());
    }

    #[test]
    fn year_options_sort_as_strings() {
        let ds: Dataset = vec![
            WellDepth::new("A", "2021", 1.0),
            WellDepth::new("A", "1999", 1.0),
            WellDepth::new("A", "2021", 2.0),
            WellDepth::new("A", "2003", 1.0),
        ]
        .into();
        assert_eq!(ds.year_options("A"), vec!["1999", "2003", "2021"]);
    }

    #[test]
    fn filtered_keeps_duplicate_pairs() {
        let ds: Dataset = vec![
            WellDepth::new("A", "2020", 10.0),
            WellDepth::new("A", "2020", 11.0),
            WellDepth::new("A", "2021", 12.0),
        ]
        .into();
        let rows = ds.filtered("A", "2020");
        assert_eq!(rows.len(), 2);
        assert!(ds.filtered("A", "1900").is_empty());
    }

    #[test]
    fn station_max_depth_spans_all_years() {
        let ds = sample();
        assert_eq!(ds.station_max_depth("A"), Some(12.0));
        assert_eq!(ds.station_max_depth("B"), Some(5.0));
        assert_eq!(ds.station_max_depth("Z"), None);
    }

    #[test]
    fn station_max_depth_skips_nan() {
        let ds: Dataset = vec![
            WellDepth::new("A", "2020", f64::NAN),
            WellDepth::new("A", "2021", 4.0),
            WellDepth::new("C", "2021", f64::NAN),
        ]
        .into();
        assert_eq!(ds.station_max_depth("A"), Some(4.0));
        assert_eq!(ds.station_max_depth("C"), None);
    }

    #[test]
    fn from_csv_loads_records_in_order() {
        let ds = Dataset::from_csv(
            "station_nm,year_datetime,avg_water_depth_ft\nB,2020,5.0\nA,2020,10.0\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].station, "B");
        assert_eq!(ds.station_options(), vec!["A", "B"]);
    }

    #[test]
    fn clones_share_records() {
        let ds = sample();
        let other = ds.clone();
        assert!(Rc::ptr_eq(&ds.records, &other.records));
    }
}
