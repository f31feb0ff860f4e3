//! Parameter schema and parsed parameter values.
//!
//! A command declares a [`ParamTable`]: flag string to [`ParamSpec`]. Parsing
//! a line against that table yields [`ParsedParams`], which only lives for
//! one dispatch.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// How a flag is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Presence requests help; dispatch renders help instead of running.
    Help,
    /// Presence means true. Takes no value.
    Boolean,
    /// Must be followed by exactly one value token.
    String,
}

impl ParamKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }

    /// Whether the flag consumes the next token.
    #[inline]
    pub fn takes_value(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared metadata for one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub kind: ParamKind,
    pub help: String,
}

impl ParamSpec {
    pub fn new(kind: ParamKind, help: impl Into<String>) -> Self {
        Self {
            kind,
            help: help.into(),
        }
    }

    pub fn help(help: impl Into<String>) -> Self {
        Self::new(ParamKind::Help, help)
    }

    pub fn boolean(help: impl Into<String>) -> Self {
        Self::new(ParamKind::Boolean, help)
    }

    pub fn string(help: impl Into<String>) -> Self {
        Self::new(ParamKind::String, help)
    }
}

/// Flag string (e.g. `--foo`) to its metadata.
///
/// Ordered so help output is stable. Keys are unique; declaring a flag
/// twice keeps the last declaration.
pub type ParamTable = BTreeMap<String, ParamSpec>;

/// A value bound to a flag during one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedParam {
    /// A help flag was present.
    Help,
    /// A boolean flag was present.
    Flag,
    /// The literal token that followed a string flag.
    Value(String),
}

impl ParsedParam {
    /// The kind of flag this value was bound for.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Help => ParamKind::Help,
            Self::Flag => ParamKind::Boolean,
            Self::Value(_) => ParamKind::String,
        }
    }

    /// The bound value, for string flags.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Help | Self::Flag => None,
        }
    }
}

/// Parameters bound by one parse, keyed by flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParams {
    params: BTreeMap<String, ParsedParam>,
}

impl ParsedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `flag`, replacing any earlier binding.
    pub fn insert(&mut self, flag: impl Into<String>, value: ParsedParam) -> Option<ParsedParam> {
        self.params.insert(flag.into(), value)
    }

    pub fn get(&self, flag: &str) -> Option<&ParsedParam> {
        self.params.get(flag)
    }

    /// Whether `flag` appeared on the line, whatever its kind.
    pub fn is_set(&self, flag: &str) -> bool {
        self.params.contains_key(flag)
    }

    /// The value bound to a string flag.
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.params.get(flag).and_then(ParsedParam::as_value)
    }

    /// Whether any help flag was parsed.
    pub fn has_help(&self) -> bool {
        self.params.values().any(|p| matches!(p, ParsedParam::Help))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParsedParam> {
        self.params.iter()
    }
}

impl<'a> IntoIterator for &'a ParsedParams {
    type Item = (&'a String, &'a ParsedParam);
    type IntoIter = btree_map::Iter<'a, String, ParsedParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, ParsedParam)> for ParsedParams {
    fn from_iter<I: IntoIterator<Item = (K, ParsedParam)>>(iter: I) -> Self {
        let mut parsed = Self::new();
        for (flag, value) in iter {
            parsed.insert(flag, value);
        }
        parsed
    }
}
