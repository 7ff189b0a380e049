use std::path::PathBuf;
use std::str::FromStr;

use simplelog::LevelFilter;

use crate::error::{ConvertError, Result};

pub const USAGE: &str = "usage: festina2gpx -input <path-to-festina-export.json>";
pub const LOG_LEVEL_ENV: &str = "FESTINA2GPX_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Convert(Config),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
}

impl Command {
    /// Parses the arguments after the program name. `-input` is the
    /// historical spelling, `--input` and `--input=<path>` work as well.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut input_path = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-input" | "--input" => match args.next() {
                    Some(path) if !path.is_empty() => input_path = Some(PathBuf::from(path)),
                    _ => return Err(usage_error(&format!("missing path after `{arg}`"))),
                },
                _ => match arg.strip_prefix("--input=") {
                    Some("") => return Err(usage_error("missing path after `--input=`")),
                    Some(path) => input_path = Some(PathBuf::from(path)),
                    None => return Err(usage_error(&format!("unexpected argument `{arg}`"))),
                },
            }
        }
        match input_path {
            Some(input_path) => Ok(Command::Convert(Config { input_path })),
            None => Err(usage_error("please provide an input file path using the -input flag")),
        }
    }
}

fn usage_error(message: &str) -> ConvertError {
    ConvertError::Usage(format!("{message}\n{USAGE}"))
}

/// `Info` unless overridden by `FESTINA2GPX_LOG`.
pub fn log_level(env_value: Option<&str>) -> LevelFilter {
    env_value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}
