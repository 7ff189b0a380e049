use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat};

use crate::error::{ConvertError, Result};

/// `1690891200000` -> `2023-08-01T12:00:00.000Z`
pub fn iso_time_of_timestamp_ms(timestamp_ms: i64) -> Result<String> {
    let time = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or(ConvertError::InvalidTimestamp(timestamp_ms))?;
    Ok(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// The GPX file lives next to the input, with the same stem.
pub fn output_path_for(input_path: &Path) -> PathBuf {
    input_path.with_extension("gpx")
}
