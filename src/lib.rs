#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod export_data;
pub mod festina_data;
pub mod heartrate_merger;
pub mod logs;
pub mod utils;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::festina_data::FestinaExport;

/// Turns the text of a Festina JSON export into the text of a GPX file.
pub fn convert_json_to_gpx(json: &str) -> Result<String> {
    let export = FestinaExport::from_json_str(json)?;
    convert_export_to_gpx(&export)
}

pub fn convert_export_to_gpx(export: &FestinaExport) -> Result<String> {
    let points =
        heartrate_merger::merge_heartrate(&export.location_data, &export.heartrate_data)?;
    export_data::gpx_string_from_points(&points)
}

/// Converts the export at `input_path` and writes the GPX file next to it.
/// Returns the path of the written file.
pub fn convert_file(input_path: &Path) -> Result<PathBuf> {
    let output_path = utils::output_path_for(input_path);
    if output_path.as_path() == input_path {
        return Err(ConvertError::OutputWouldOverwriteInput(output_path));
    }

    let json = fs::read_to_string(input_path).map_err(|source| ConvertError::ReadInput {
        path: input_path.to_path_buf(),
        source,
    })?;
    let gpx = convert_json_to_gpx(&json)?;

    fs::write(&output_path, gpx).map_err(|source| ConvertError::WriteOutput {
        path: output_path.clone(),
        source,
    })?;
    info!("wrote {:?}", output_path);
    Ok(output_path)
}
