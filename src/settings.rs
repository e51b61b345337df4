//! Runtime settings read from `FLDARKLINT_*` environment variables.
//!
//! * `FLDARKLINT_LOG_LEVEL` – level filter, `INFO` when unset.
//! * `FLDARKLINT_LOG_JSON` – `true` switches log output to JSON lines.
//! * `FLDARKLINT_LOG_SHOW_FILE_LOCATIONS` – `true` adds source file and line to events.

// config lets you read settings from the environment
use config::{Config, Environment, Map};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{LintError, Result};

pub const ENV_PREFIX: &str = "FLDARKLINT";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub log_json: bool,
    pub log_show_file_locations: bool,
}

impl Settings {
    /// Settings from the process environment.
    pub fn load() -> Result<Settings> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }
    /// Settings from an explicit variable map, e.g. `FLDARKLINT_LOG_JSON => "true"`.
    pub fn from_vars(vars: Map<String, String>) -> Result<Settings> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }
    fn from_environment(environment: Environment) -> Result<Settings> {
        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("log_json", "false")?
            .set_default("log_show_file_locations", "false")?
            .add_source(environment)
            .build()?
            .try_deserialize::<RawSettings>()?;
        Ok(settings.into())
    }

    /// Installs the global tracing subscriber. Fails if one is already set.
    pub fn init_logging(&self) -> Result<()> {
        let filter = EnvFilter::try_new(self.log_level.to_lowercase())
            .map_err(|e| LintError::Config(format!("invalid log level {}: {e}", self.log_level)))?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(self.log_show_file_locations)
            .with_line_number(self.log_show_file_locations);
        let installed = if self.log_json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed.map_err(|e| LintError::Config(e.to_string()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            log_show_file_locations: false,
        }
    }
}

// switches are only on for the literal "true", any case
#[derive(Deserialize)]
struct RawSettings {
    log_level: String,
    log_json: String,
    log_show_file_locations: String,
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        Self {
            log_level: raw.log_level,
            log_json: raw.log_json.eq_ignore_ascii_case("true"),
            log_show_file_locations: raw.log_show_file_locations.eq_ignore_ascii_case("true"),
        }
    }
}
