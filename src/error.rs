use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read input file {path:?}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input is not a valid Festina export: {0}")]
    Format(#[from] serde_json::Error),
    #[error("timestamp {0} ms is out of the representable range")]
    InvalidTimestamp(i64),
    #[error("no location sample has a preceding heart rate sample, nothing to export")]
    NoTrackPoints,
    #[error("output path {0:?} is the input file itself")]
    OutputWouldOverwriteInput(PathBuf),
    #[error("failed to write GPX file {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to emit GPX xml")]
    Xml(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
