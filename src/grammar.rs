//! Line patterns of the extended INI dialect.
//!
//! A [`Grammar`] is built once and handed by reference to everything that
//! classifies text. It holds no mutable state, so a single instance can be
//! shared between threads parsing different files.

// the "standard" regular expression package
use regex::{Captures, Regex};

// so regular expressions don't have to be recompiled
use lazy_static::lazy_static;

lazy_static! {
    static ref SHARED: Grammar = Grammar::new();
}

/// Separator between the values of a multi-value parameter.
pub const VALUE_SEPARATOR: &str = ", ";

#[derive(Debug)]
pub struct Grammar {
    number: Regex,
    comment: Regex,
    section: Regex,
    param: Regex,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            number: compile(r"^-?[0-9]+(?:\.([0-9]*))?$"),
            comment: compile(r"^\s*;(.*)"),
            section: compile(r"^\s*(\[.*\])"),
            // param or commented out param, may follow leading text
            param: compile(r"(;?)%?([a-zA-Z_]+)\s=\s([a-zA-Z_, 0-9\-.\\/]+)"),
        }
    }
    /// The process-wide instance used by the convenience entry points.
    pub fn shared() -> &'static Grammar {
        &SHARED
    }
    pub(crate) fn number<'t>(&self, raw: &'t str) -> Option<Captures<'t>> {
        self.number.captures(raw)
    }
    pub(crate) fn comment<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        self.comment.captures(line)
    }
    pub(crate) fn section<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        self.section.captures(line)
    }
    pub(crate) fn param<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        self.param.captures(line)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

// the patterns above are constants, a failure here is a programming error
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid grammar pattern {pattern}: {e}"))
}
