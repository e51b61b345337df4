//! Generic reader of the extended INI dialect.
//!
//! ```text
//! ; free comment                     -> IniFile::comments
//! [BaseGood]                         -> Section::tag
//! abc = qwe, 1, 2.50                 -> Param { key: abc, values: [qwe, 1, 2.50] }
//! ```
//!
//! Each line is tested as a comment, then as a section header, then as a
//! parameter. The first pattern that matches decides, anything else is
//! skipped. Params that appear before the first header are collected in an
//! untagged preamble section, which is only kept if it received any.

use tracing::debug;

use crate::error::{LintError, Result};
use crate::grammar::{Grammar, VALUE_SEPARATOR};
use crate::keeper::{Keeper, Keyed, Lookup};
use crate::source::LineSource;
use crate::value::Value;

// ------------- Param -------------
/// One `key = value, value, ...` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    key: String,
    values: Vec<Value>,
    is_comment: bool,
}

impl Param {
    /// Returns `None` when `values` is empty, a param always holds at least one.
    pub fn new(key: String, values: Vec<Value>, is_comment: bool) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            key,
            values,
            is_comment,
        })
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn first(&self) -> &Value {
        &self.values[0]
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    /// Whether the param was commented out with a leading `;`.
    pub fn is_comment(&self) -> bool {
        self.is_comment
    }
}

impl Keyed for Param {
    fn key(&self) -> &str {
        &self.key
    }
}

// ------------- Section -------------
#[derive(Debug, Default)]
pub struct Section {
    tag: String,
    params: Keeper<Param>,
}

impl Section {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            params: Keeper::new(),
        }
    }
    /// Header text including the brackets, empty for the preamble section.
    pub fn tag(&self) -> &str {
        &self.tag
    }
    pub fn params(&self) -> &Keeper<Param> {
        &self.params
    }
    /// All params sharing `key`, in source order.
    pub fn lookup(&self, key: &str) -> Lookup<'_, Param> {
        self.params.lookup(key)
    }
    /// First value of the first param under `key`.
    pub fn first_value(&self, key: &str) -> Option<&Value> {
        self.params.first(key).map(Param::first)
    }
    pub fn add_param(&mut self, param: Param) -> &Param {
        self.params.keep(param)
    }
}

impl Keyed for Section {
    fn key(&self) -> &str {
        &self.tag
    }
}

// ------------- IniFile -------------
#[derive(Debug, Default)]
pub struct IniFile {
    name: String,
    comments: Vec<String>,
    sections: Keeper<Section>,
}

impl IniFile {
    /// Reads all lines of `source` with the shared grammar.
    pub fn read(source: &impl LineSource) -> Result<IniFile> {
        Self::read_with(Grammar::shared(), source)
    }
    pub fn read_with(grammar: &Grammar, source: &impl LineSource) -> Result<IniFile> {
        debug!(file = source.name(), "started reading ini file");
        let lines = source.lines()?;
        Self::parse_lines(grammar, source.name(), lines.as_slice())
    }
    pub fn parse_lines<S: AsRef<str>>(grammar: &Grammar, name: &str, lines: &[S]) -> Result<IniFile> {
        let mut file = IniFile {
            name: name.to_string(),
            ..IniFile::default()
        };
        let mut current = Section::default();
        for (number, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if let Some(comment) = grammar.comment(line) {
                file.comments.push(comment[1].to_string());
            } else if let Some(header) = grammar.section(line) {
                let next = Section::new(&header[1]);
                file.close(std::mem::replace(&mut current, next));
            } else if let Some(param) = grammar.param(line) {
                let param = parse_param(grammar, &param).map_err(|e| match e {
                    LintError::Parse { message, .. } => LintError::Parse {
                        message: format!("{message} in {name}"),
                        line: Some(number + 1),
                    },
                    other => other,
                })?;
                current.add_param(param);
            }
        }
        file.close(current);
        debug!(file = name, sections = file.sections.len(), comments = file.comments.len(), "finished reading ini file");
        Ok(file)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Bodies of the free comment lines, marker stripped.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }
    pub fn sections(&self) -> &Keeper<Section> {
        &self.sections
    }
    /// All sections with the given header tag, e.g. `[Base]`, in source order.
    pub fn lookup(&self, tag: &str) -> Lookup<'_, Section> {
        self.sections.lookup(tag)
    }
    fn close(&mut self, section: Section) {
        // the preamble only counts when params were written before the first header
        if section.tag.is_empty() && section.params.is_empty() {
            return;
        }
        self.sections.keep(section);
    }
}

fn parse_param(grammar: &Grammar, captures: &regex::Captures) -> Result<Param> {
    let is_comment = !captures[1].is_empty();
    let key = captures[2].to_string();
    let values = captures[3]
        .trim_end()
        .split(VALUE_SEPARATOR)
        .map(|raw| Value::classify_with(grammar, raw))
        .collect::<Result<Vec<_>>>()?;
    Param::new(key, values, is_comment).ok_or_else(|| LintError::Parse {
        message: "parameter without values".to_string(),
        line: None,
    })
}
