//! Command implementations for the well depth CLI.
//!
//! Lists stations and years from a well depth CSV and renders the bar chart
//! for a chosen (station, year) to an SVG file.

use clap::Subcommand;

pub mod input;
pub mod list;
pub mod plot;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// List the stations in a well depth CSV, sorted
    Stations {
        /// Path or http(s) URL of the CSV (may be gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,
    },

    /// List the years recorded for one station, sorted
    Years {
        /// Path or http(s) URL of the CSV (may be gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,

        /// Station name exactly as it appears in `station_nm`
        #[arg(short = 's', long)]
        station: String,
    },

    /// Render the bar chart for a station and year to an SVG file
    Render {
        /// Path or http(s) URL of the CSV (may be gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,

        /// Output path for the SVG
        #[arg(short = 'o', long)]
        output: String,

        /// Station to show (default: first station)
        #[arg(short = 's', long)]
        station: Option<String>,

        /// Year to show (default: first year of the station)
        #[arg(short = 'y', long)]
        year: Option<String>,

        /// JSON chart configuration overriding the default layout
        #[arg(short = 'c', long)]
        config: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stations { input } => {
            let dataset = input::load_dataset(&input).await?;
            list::write_stations(&dataset, &mut std::io::stdout().lock())
        }
        Command::Years { input, station } => {
            let dataset = input::load_dataset(&input).await?;
            list::write_years(&dataset, &station, &mut std::io::stdout().lock())
        }
        Command::Render {
            input,
            output,
            station,
            year,
            config,
        } => render::run_render(&input, &output, station, year, config.as_deref()).await,
    }
}
