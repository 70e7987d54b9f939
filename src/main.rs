mod config;

use std::process::ExitCode;

use config::{Config, ConfigError};
use flatras::logging::{init_logging, LoggingConfig};
use flatras::{finish, render, Canvas, ImageFile, Mesh};

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = Mesh::from_obj(&config.input)?;

    let mut canvas = Canvas::new(config.width, config.height);
    render(
        &mesh,
        &mut canvas,
        config.base_color,
        config.strategy,
        &config.settings,
    )?;

    // Origin goes to the bottom-left corner of the image.
    finish(canvas, &mut ImageFile::new(&config.output))?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", config::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
