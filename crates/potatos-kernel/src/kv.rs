//! `key=value` argument parsing for `set` and `alias`.
//!
//! Tokens are scanned from the end of the line backward in groups of three
//! (`key`, `=`, `value`). A trailing `key=` yields an empty value. Malformed
//! groups turn into [`ShellError::Syntax`] entries in the result, so one line
//! can report several independent problems.

use crate::error::ShellError;
use crate::tokenizer::{Token, Tokenizer};

/// One parsed `key=value` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parse every `key=value` group in `input`, in left-to-right order.
pub fn parse_key_value_pairs(input: &str) -> Vec<Result<KeyValuePair, ShellError>> {
    let tokens: Vec<Token> = Tokenizer::with_delimiters("=")
        .append(input)
        .flush()
        .into_iter()
        .filter(|t| !t.is_whitespace())
        .collect();

    if tokens.len() < 2 {
        let got = tokens
            .iter()
            .map(|t| t.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        return vec![Err(ShellError::Syntax(got))];
    }

    let mut pairs = Vec::new();
    let mut i = tokens.len() as isize - 1;
    while i > 0 {
        let mut key = content_at(&tokens, i - 2);
        let mut eq = content_at(&tokens, i - 1);
        let mut value = content_at(&tokens, i);

        if value == "=" && eq != "=" {
            // trailing `key=` with nothing after it
            key = eq;
            eq = value;
            value = "";
            i -= 2;
        } else {
            i -= 3;
        }

        if key.is_empty() || eq != "=" {
            pairs.push(Err(ShellError::Syntax(format!("{key}{eq}{value}"))));
            continue;
        }

        pairs.push(Ok(KeyValuePair::new(key, value)));
    }

    pairs.reverse();
    pairs
}

/// Token text at `idx`, or `""` when the index falls off the front.
fn content_at(tokens: &[Token], idx: isize) -> &str {
    usize::try_from(idx)
        .ok()
        .and_then(|i| tokens.get(i))
        .map(|t| t.content.as_str())
        .unwrap_or_default()
}
