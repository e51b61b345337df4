//! Providers of text lines.
//!
//! The reader never touches the file system itself. It asks a [`LineSource`]
//! for the lines of a named resource, which keeps the parser testable on
//! in-memory text and lets the binary read from disk.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

pub trait LineSource {
    /// Name used in logs and errors, usually the file name.
    fn name(&self) -> &str;
    /// Ordered lines without their line terminators.
    fn lines(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl LineSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }
    fn lines(&self) -> Result<Vec<String>> {
        debug!(file = %self.name, "opening file");
        // game data is not always valid UTF-8
        let bytes = fs::read(&self.path)?;
        Ok(split_lines(&String::from_utf8_lossy(&bytes)))
    }
}

#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl LineSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }
    fn lines(&self) -> Result<Vec<String>> {
        Ok(split_lines(&self.text))
    }
}

// str::lines also strips the \r of Windows line endings
fn split_lines(text: &str) -> Vec<String> {
    // files saved by Windows editors may start with a byte order mark
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().map(str::to_string).collect()
}
