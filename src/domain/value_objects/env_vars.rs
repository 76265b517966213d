//! Environment mapping exported into the remote session's shell
//!
//! Keeps insertion order so the rendered `export` fragment is deterministic.

use indexmap::IndexMap;

use crate::error::{FireError, FireResult};

/// Ordered mapping of variable name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(IndexMap<String, String>);

impl EnvVars {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a variable, rejecting names that are not shell identifiers
    ///
    /// Re-inserting a name keeps its original position and replaces the value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> FireResult<()> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(FireError::InvalidEnvName { name });
        }
        self.0.insert(name, value.into());
        Ok(())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> FireResult<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Build from `(name, value)` pairs, validating every name
    pub fn from_pairs<I, K, V>(pairs: I) -> FireResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (name, value) in pairs {
            env.insert(name, value)?;
        }
        Ok(env)
    }

    /// Layer `other` on top of `self`; names in `other` win
    pub fn merged(&self, other: &EnvVars) -> EnvVars {
        let mut merged = self.clone();
        for (name, value) in &other.0 {
            merged.0.insert(name.clone(), value.clone());
        }
        merged
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as space-separated `NAME=value` assignments for `export`
    ///
    /// Values are escaped so that one pass of shell word parsing yields the
    /// original value: quote characters (and every other character outside
    /// a conservative safe set) get a backslash, newlines are single-quoted.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", name, escape_value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Escape one value for unquoted shell context
pub(crate) fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\n' {
            // backslash-newline is a line continuation, so quote it instead
            out.push_str("'\n'");
        } else if is_safe(c) || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
