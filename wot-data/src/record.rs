use crate::error::{Result, WellDataError};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Header naming the monitoring station.
pub const STATION_COLUMN: &str = "station_nm";
/// Header naming the observation year.
pub const YEAR_COLUMN: &str = "year_datetime";
/// Header naming the average water depth in feet.
pub const DEPTH_COLUMN: &str = "avg_water_depth_ft";

/// One well depth observation: a station's average water depth for a year.
///
/// The year is a categorical label and is never parsed as a date or number.
/// `avg_water_depth_ft` is 0 when the source field was blank and NaN when it
/// was missing or not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellDepth {
    /// Monitoring station name (e.g., "MW-12 Crescent Valley")
    #[serde(rename = "station_nm")]
    pub station: String,
    /// Year label as it appears in the source (e.g., "2021")
    #[serde(rename = "year_datetime")]
    pub year: String,
    /// Average depth to water in feet
    pub avg_water_depth_ft: f64,
}

impl WellDepth {
    pub fn new(station: impl Into<String>, year: impl Into<String>, avg_water_depth_ft: f64) -> Self {
        Self {
            station: station.into(),
            year: year.into(),
            avg_water_depth_ft,
        }
    }

    /// True when the depth parsed to a usable number.
    pub fn has_depth(&self) -> bool {
        self.avg_water_depth_ft.is_finite()
    }
}

/// Column positions resolved from the header row.
struct Columns {
    station: usize,
    year: usize,
    depth: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| WellDataError::missing_column(name))
        };
        Ok(Self {
            station: find(STATION_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            depth: find(DEPTH_COLUMN)?,
        })
    }
}

/// Coerce a depth field to `f64` with browser number-conversion rules.
///
/// Blank text is 0. Non-numeric text is NaN. `Infinity` (optionally signed)
/// is the only spelled-out value accepted; `inf` and `nan` are NaN.
pub fn coerce_depth(field: &str) -> f64 {
    let text = field.trim();
    if text.is_empty() {
        return 0.0;
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a CSV string of well depth observations into a vector of WellDepth.
///
/// Expected headers: station_nm, year_datetime, avg_water_depth_ft (any order,
/// extra columns ignored). Rows are kept in source order and never rejected:
/// a short row yields empty strings and a NaN depth for its missing fields,
/// while a present but blank depth is 0.
pub fn parse_well_depth_csv(csv_object: &str) -> Result<Vec<WellDepth>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut records: Vec<WellDepth> = Vec::new();
    let mut malformed = 0u32;
    for row in rdr.records() {
        let row = row?;
        let station = row.get(columns.station).unwrap_or("");
        let year = row.get(columns.year).unwrap_or("");
        let depth = row.get(columns.depth).map(coerce_depth).unwrap_or(f64::NAN);
        if depth.is_nan() {
            malformed += 1;
        }
        records.push(WellDepth::new(station, year, depth));
    }
    log::info!(
        "parsed {} well depth records ({} without a numeric depth)",
        records.len(),
        malformed
    );
    Ok(records)
}
