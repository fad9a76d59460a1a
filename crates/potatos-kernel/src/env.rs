//! Session environment variables.
//!
//! All values are strings. Unset and empty are indistinguishable to readers:
//! [`Environment::get`] returns `""` for both. The shell keeps its working
//! directory, prompt, user name, indent and history size here too.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::{ShellError, ShellResult};

/// Current working directory.
pub const CWD: &str = "CWD";
/// Prompt template, interpolated before display.
pub const PROMPT: &str = "PROMPT";
/// Name of the session user.
pub const USER: &str = "USER";
/// Indent used by listing commands.
pub const TAB: &str = "TAB";
/// Maximum number of history entries kept. Negative means unbounded.
pub const HISTORY_MAX: &str = "HISTORY_MAX";

/// `$NAME` references inside a string.
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\$([a-zA-Z0-9_-]+)").expect("variable pattern is valid")
});

/// Ordered string-to-string store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: IndexMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Numeric value of `key`, or `0` when unset or not a number.
    pub fn get_number(&self, key: &str) -> f64 {
        self.get(key)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| !n.is_nan())
            .unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Store a string value. Fails on an empty key.
    pub fn put(&mut self, key: &str, value: impl Into<String>) -> ShellResult<()> {
        if key.is_empty() {
            return Err(ShellError::EmptyKey);
        }
        self.vars.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Store a structured value, stringified.
    ///
    /// Strings are stored as-is, booleans and numbers in their display form,
    /// arrays and objects as compact JSON, and `null` as `""`.
    pub fn put_value(&mut self, key: &str, value: &Value) -> ShellResult<()> {
        let text = match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        self.put(key, text)
    }

    /// Replace every `$NAME` whose variable is set. Unset references are
    /// left verbatim.
    pub fn interpolate(&self, input: &str) -> String {
        VAR_PATTERN
            .replace_all(input, |caps: &Captures<'_>| match self.vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Variable names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
