use std::env;
use std::process::ExitCode;

use anyhow::Context;
use festina2gpx::config::{self, Command, USAGE};
use festina2gpx::logs;

pub fn main() -> ExitCode {
    let command = match Command::from_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let config = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Convert(config) => config,
    };

    let level = config::log_level(env::var(config::LOG_LEVEL_ENV).ok().as_deref());
    if let Err(e) = logs::init(level) {
        eprintln!("failed to initialize logging: {e:?}");
    }

    let result = festina2gpx::convert_file(&config.input_path)
        .with_context(|| format!("failed to convert {:?}", config.input_path));
    match result {
        Ok(output_path) => {
            println!("GPX file has been created: {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
