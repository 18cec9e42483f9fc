//! Turns raw CSV source bytes into text.
//!
//! The dataset may be served as `well_depth.csv` or `well_depth.csv.gz`;
//! gzip input is recognized by its magic number rather than by file name.

use crate::error::{Result, WellDataError};
use flate2::read::GzDecoder;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true if `bytes` start with the gzip magic number.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Decode plain UTF-8 or gzip-compressed bytes into a CSV string.
pub fn decode_source(bytes: &[u8]) -> Result<String> {
    if is_gzip(bytes) {
        let mut decoder = GzDecoder::new(bytes);
        let mut text = String::new();
        decoder
            .read_to_string(&mut text)
            .map_err(WellDataError::Decompress)?;
        log::debug!(
            "decompressed gzip source: {} -> {} bytes",
            bytes.len(),
            text.len()
        );
        Ok(text)
    } else {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
