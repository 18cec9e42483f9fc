//! `render` subcommand: draw one (station, year) selection to an SVG file.

use crate::{input, plot};
use anyhow::Context;
use log::info;
use wot_chart::{render_chart, ChartConfig};
use wot_data::{Dataset, FilterEvent, FilterState};

/// Load a chart configuration from a JSON file, or the default layout.
pub async fn load_config(path: Option<&str>) -> anyhow::Result<ChartConfig> {
    match path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read config {}", path))?;
            ChartConfig::from_json(&json).with_context(|| format!("invalid config {}", path))
        }
        None => Ok(ChartConfig::default()),
    }
}

/// Resolve the selection the same way the dropdowns would: start from the
/// initial state, then change station, then change year.
pub fn select(dataset: &Dataset, station: Option<String>, year: Option<String>) -> FilterState {
    let mut filter = FilterState::initial(dataset);
    if let Some(station) = station {
        filter = filter.apply(dataset, FilterEvent::StationChanged(station));
    }
    if let Some(year) = year {
        filter = filter.apply(dataset, FilterEvent::YearChanged(year));
    }
    filter
}

/// Render the selected chart as an SVG document.
pub fn render_svg(
    dataset: &Dataset,
    filter: &FilterState,
    config: &ChartConfig,
) -> anyhow::Result<String> {
    plot::draw_svg(&render_chart(dataset, filter, config), config)
}

pub async fn run_render(
    input: &str,
    output: &str,
    station: Option<String>,
    year: Option<String>,
    config: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config).await?;
    let dataset = input::load_dataset(input).await?;
    let filter = select(&dataset, station, year);
    let svg = render_svg(&dataset, &filter, &config)?;

    tokio::fs::write(output, svg)
        .await
        .with_context(|| format!("failed to write {}", output))?;
    info!(
        "Rendered {:?} / {:?} to {}",
        filter.station, filter.year, output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "station_nm,year_datetime,avg_water_depth_ft\n\
                       B,2020,5.0\n\
                       A,2021,12.0\n\
                       A,2020,10.0\n";

    fn sample() -> Dataset {
        Dataset::from_csv(CSV).unwrap()
    }

    #[test]
    fn default_selection_is_first_station_and_year() {
        let filter = select(&sample(), None, None);
        assert_eq!(filter.station.as_deref(), Some("A"));
        assert_eq!(filter.year.as_deref(), Some("2020"));
    }

    #[test]
    fn station_change_resets_year() {
        let filter = select(&sample(), Some("B".into()), None);
        assert_eq!(filter.station.as_deref(), Some("B"));
        assert_eq!(filter.year.as_deref(), Some("2020"));
    }

    #[test]
    fn unknown_year_falls_back_to_first() {
        let filter = select(&sample(), Some("A".into()), Some("1999".into()));
        assert_eq!(filter.year.as_deref(), Some("2020"));
    }

    #[tokio::test]
    async fn render_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("well_depth.csv");
        std::fs::write(&input, CSV).unwrap();
        let output = dir.path().join("chart.svg");

        run_render(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            Some("A".into()),
            Some("2021".into()),
            None,
        )
        .await
        .unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.to_lowercase().matches("fill=\"#4682b4\"").count(), 1);
        assert!(svg.contains(">2021</text>"));
    }

    #[tokio::test]
    async fn config_file_overrides_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"width": 1200, "bar_fill": "#008080"}}"##).unwrap();
        let config = load_config(file.path().to_str()).await.unwrap();
        assert_eq!(config.width, 1200.0);
        assert_eq!(config.bar_fill, "#008080");
        assert_eq!(config.height, 500.0);
    }

    #[tokio::test]
    async fn bad_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_config(file.path().to_str()).await.unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
