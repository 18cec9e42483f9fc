//! `stations` and `years` subcommands.

use std::io::Write;
use wot_data::Dataset;

/// Write the sorted station names, one per line.
pub fn write_stations(dataset: &Dataset, out: &mut impl Write) -> anyhow::Result<()> {
    for station in dataset.station_options() {
        writeln!(out, "{}", station)?;
    }
    Ok(())
}

/// Write the sorted years of `station`, one per line.
///
/// An unknown station prints nothing.
pub fn write_years(dataset: &Dataset, station: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let years = dataset.year_options(station);
    if years.is_empty() {
        log::warn!("No records for station {:?}", station);
    }
    for year in years {
        writeln!(out, "{}", year)?;
    }
    Ok(())
}
