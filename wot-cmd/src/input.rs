//! Reads the well depth CSV from a file or an http(s) URL.

use anyhow::Context;
use log::info;
use wot_data::Dataset;

/// True if `input` should be fetched over HTTP rather than read from disk.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Read the raw bytes behind `input`.
pub async fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    if is_url(input) {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        let response = client
            .get(input)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", input))?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        tokio::fs::read(input)
            .await
            .with_context(|| format!("failed to read {}", input))
    }
}

/// Load and parse the dataset behind `input`.
pub async fn load_dataset(input: &str) -> anyhow::Result<Dataset> {
    let bytes = read_input(input).await?;
    let dataset =
        Dataset::from_source(&bytes).with_context(|| format!("failed to parse {}", input))?;
    info!(
        "Loaded {} records ({} stations) from {}",
        dataset.len(),
        dataset.station_options().len(),
        input
    );
    Ok(dataset)
}
