use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use fldarklint::settings::Settings;
use fldarklint::source::FileSource;
use fldarklint::universe::{UniverseConfig, FILENAME};

fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = settings.init_logging() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let path = env::args().nth(1).unwrap_or_else(|| FILENAME.to_string());
    let source = FileSource::new(&path);
    let (config, document) = match UniverseConfig::read(&source) {
        Ok(read) => read,
        Err(e) => {
            error!(error = %e, file = %path, "failed to read universe");
            return ExitCode::FAILURE;
        }
    };
    info!(
        file = %path,
        sections = document.sections().len(),
        bases = config.bases().len(),
        systems = config.systems().len(),
        "universe read"
    );

    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to render universe");
            ExitCode::FAILURE
        }
    }
}
