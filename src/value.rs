//! Typed scalars of the extended INI dialect.
//!
//! Every comma separated token on a parameter line is classified into a
//! [`Value`]: either a [`Number`] that remembers how many decimals it was
//! written with, or the raw text. Rendering a number uses the remembered
//! precision, so `-12.340` comes back out as `-12.340` rather than `-12.34`.

// used to print out readable forms of a value
use std::fmt;

use serde::Serialize;

use crate::error::{LintError, Result};
use crate::grammar::Grammar;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Number {
    value: f64,
    precision: usize,
}

impl Number {
    pub fn new(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    /// Digits after the decimal point as written in the source.
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.*}", self.precision, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(Number),
}

impl Value {
    /// Classifies a raw token using the shared [`Grammar`].
    pub fn classify(raw: &str) -> Result<Value> {
        Self::classify_with(Grammar::shared(), raw)
    }
    pub fn classify_with(grammar: &Grammar, raw: &str) -> Result<Value> {
        let Some(captures) = grammar.number(raw) else {
            return Ok(Value::String(raw.to_string()));
        };
        let value = raw.parse::<f64>().map_err(|e| LintError::Parse {
            message: format!("failed to read number, input={raw}: {e}"),
            line: None,
        })?;
        // overlong digit strings parse to infinity instead of failing
        if !value.is_finite() {
            return Err(LintError::Parse {
                message: format!("number out of range, input={raw}"),
                line: None,
            });
        }
        let precision = captures.get(1).map_or(0, |fraction| fraction.as_str().len());
        Ok(Value::Number(Number::new(value, precision)))
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) => None,
        }
    }
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::String(_) => None,
            Value::Number(n) => Some(*n),
        }
    }
    /// Integer reading of the rendered form, so `7` converts but `7.0` does not.
    pub fn as_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }
    /// Lower-cased rendering, used for nicknames and other case-insensitive ids.
    pub fn to_lower(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}
