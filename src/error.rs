
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {message}")]
    Parse { message: String, line: Option<usize> },
    #[error("Missing section {tag} in {file}")]
    MissingSection { file: String, tag: String },
    #[error("Missing key {key} in section {tag}")]
    MissingKey { tag: String, key: String },
    #[error("Invalid number for {key} in section {tag}: {value}")]
    InvalidNumber { tag: String, key: String, value: String },
}

pub type Result<T> = std::result::Result<T, LintError>;

// Helper conversions
impl From<config::ConfigError> for LintError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
