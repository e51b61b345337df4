// used to print out readable forms of a path
use std::fmt;

use serde::Serialize;

/// Relative path of a game data file.
///
/// Data files reference each other with Windows separators in arbitrary case.
/// The path is kept lower-cased with forward slashes and can be turned back
/// into the backslash form when needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilePath(String);

impl FilePath {
    pub fn new(raw: &str) -> Self {
        Self(raw.replace('\\', "/").to_lowercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn to_slash(&self) -> String {
        self.0.clone()
    }
    pub fn to_backslash(&self) -> String {
        self.0.replace('/', "\\")
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
