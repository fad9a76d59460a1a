//! Quote- and escape-aware line tokenizer.
//!
//! The tokenizer walks its input one character at a time and splits it into
//! [`Token`]s:
//!
//! - runs of whitespace become a single [`TokenKind::Whitespace`] token
//! - `"double quoted"` spans become one [`TokenKind::DoubleQuoted`] token
//!   with the quotes stripped and interior whitespace kept
//! - each configured delimiter character becomes its own
//!   [`TokenKind::Delimiter`] token
//! - everything else accumulates into [`TokenKind::Text`]
//!
//! A backslash escapes the next character anywhere, removing its special
//! meaning. [`join`] is the inverse: it re-wraps quoted tokens and re-escapes
//! quote and backslash characters inside them.
//!
//! ```
//! use potatos_kernel::tokenizer::{join, tokenize};
//!
//! let line = r#"echo "hello world" again"#;
//! assert_eq!(join(&tokenize(line)), line);
//! ```

use std::fmt;

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain, unquoted text.
    Text,
    /// A run of whitespace outside quotes.
    Whitespace,
    /// Content of a `"..."` span, quotes removed.
    DoubleQuoted,
    /// Content of a `'...'` span. Never produced by [`Tokenizer`], but
    /// understood by [`join`].
    SingleQuoted,
    /// A single configured delimiter character.
    Delimiter,
}

/// A classified substring of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Shorthand for a [`TokenKind::Text`] token.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, TokenKind::Text)
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Stateful tokenizer.
///
/// Feed it input with [`append`](Self::append), then call
/// [`flush`](Self::flush) to emit the trailing buffered token and collect the
/// result. `flush` resets all state, so one instance can be reused for many
/// lines.
///
/// With a `limit`, the tokenizer stops once that many tokens are collected
/// and silently discards the rest of the input. [`consumed`](Self::consumed)
/// reports how many bytes were read before stopping.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    delimiters: Vec<char>,
    limit: Option<usize>,
    tokens: Vec<Token>,
    buffer: String,
    in_escape: bool,
    in_double_quote: bool,
    in_whitespace: bool,
    consumed: usize,
}

impl Tokenizer {
    /// Tokenizer with no delimiters and no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer that splits out each character of `delimiters`.
    pub fn with_delimiters(delimiters: &str) -> Self {
        Self {
            delimiters: delimiters.chars().collect(),
            ..Self::default()
        }
    }

    /// Stop after `limit` tokens. A limit of zero means unlimited.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Feed more input.
    pub fn append(&mut self, input: &str) -> &mut Self {
        for (idx, ch) in input.char_indices() {
            if self.limit_reached() {
                self.consumed += idx;
                return self;
            }
            self.append_char(ch);
        }
        self.consumed += input.len();
        self
    }

    /// Bytes of input read since the last flush.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Emit any buffered token, reset state, and hand back everything
    /// collected so far.
    pub fn flush(&mut self) -> Vec<Token> {
        self.flush_buffer();
        self.consumed = 0;
        std::mem::take(&mut self.tokens)
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.tokens.len() >= limit)
    }

    fn put_token(&mut self, token: Token) {
        if !self.limit_reached() {
            self.tokens.push(token);
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.in_escape = false;
        self.in_double_quote = false;
        self.in_whitespace = false;
    }

    /// Classify the buffer by the state active right now, then reset.
    fn flush_buffer(&mut self) {
        if !self.buffer.is_empty() {
            let kind = if self.in_double_quote {
                TokenKind::DoubleQuoted
            } else if self.in_whitespace {
                TokenKind::Whitespace
            } else {
                TokenKind::Text
            };
            let content = std::mem::take(&mut self.buffer);
            self.put_token(Token::new(content, kind));
        }
        self.reset();
    }

    fn ends_whitespace_run(&self) -> bool {
        self.in_whitespace && !self.in_double_quote
    }

    fn append_char(&mut self, ch: char) {
        if self.limit_reached() {
            return;
        }

        if ch == '\\' && !self.in_escape {
            // an escaped character is text, never part of a whitespace run
            if self.ends_whitespace_run() {
                self.flush_buffer();
            }
            self.in_escape = true;
            return;
        }

        if self.in_escape {
            self.buffer.push(ch);
            self.in_escape = false;
            return;
        }

        if ch == '"' {
            // flushing clears the quote flag, so remember it first
            let was_quoted = self.in_double_quote;
            self.flush_buffer();
            self.in_double_quote = !was_quoted;
            return;
        }

        if ch.is_whitespace() {
            if self.in_double_quote || self.in_whitespace {
                self.buffer.push(ch);
                return;
            }
            self.flush_buffer();
            self.in_whitespace = true;
            self.buffer.push(ch);
            return;
        }

        if self.ends_whitespace_run() {
            self.flush_buffer();
        }

        if self.delimiters.contains(&ch) {
            if self.in_double_quote {
                self.buffer.push(ch);
                return;
            }
            self.flush_buffer();
            self.put_token(Token::new(ch.to_string(), TokenKind::Delimiter));
            return;
        }

        self.buffer.push(ch);
    }
}

/// Tokenize a whole string with no delimiters.
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new().append(input).flush()
}

/// Split a line into its command word and the trimmed remainder.
///
/// Only the first token is produced, so the rest of the line is never
/// tokenized. Returns `None` for input with no tokens.
pub fn split_command(line: &str) -> Option<(String, &str)> {
    let mut tokenizer = Tokenizer::new().with_limit(1);
    tokenizer.append(line);
    let consumed = tokenizer.consumed();
    let word = tokenizer.flush().into_iter().next()?;
    let rest = line.get(consumed..).unwrap_or_default().trim();
    Some((word.content, rest))
}

/// Prefix every character of `value` found in `chars` with a backslash.
pub fn escape(value: &str, chars: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if chars.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Rebuild a string from tokens.
///
/// Quoted tokens are wrapped in their quote character with quote and
/// backslash characters re-escaped. Other kinds are concatenated as-is.
pub fn join(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::DoubleQuoted => {
                out.push('"');
                out.push_str(&escape(&token.content, "\"\\"));
                out.push('"');
            }
            TokenKind::SingleQuoted => {
                out.push('\'');
                out.push_str(&escape(&token.content, "'\\"));
                out.push('\'');
            }
            _ => out.push_str(&token.content),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws(s: &str) -> Token {
        Token::new(s, TokenKind::Whitespace)
    }

    fn delim(s: &str) -> Token {
        Token::new(s, TokenKind::Delimiter)
    }

    fn quoted(s: &str) -> Token {
        Token::new(s, TokenKind::DoubleQuoted)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            tokenize("hello, world!"),
            vec![Token::text("hello,"), ws(" "), Token::text("world!")]
        );
    }

    #[test]
    fn keeps_leading_and_trailing_whitespace() {
        assert_eq!(
            tokenize(" hello, world! "),
            vec![
                ws(" "),
                Token::text("hello,"),
                ws(" "),
                Token::text("world!"),
                ws(" "),
            ]
        );
    }

    #[test]
    fn contiguous_whitespace_is_one_token() {
        assert_eq!(
            tokenize("hello,  \t\n  world!"),
            vec![Token::text("hello,"), ws("  \t\n  "), Token::text("world!")]
        );
    }

    #[test]
    fn splits_configured_delimiters() {
        let tokens = Tokenizer::with_delimiters("=|")
            .append("set foo=bar|baz qux|34")
            .flush();
        assert_eq!(
            tokens,
            vec![
                Token::text("set"),
                ws(" "),
                Token::text("foo"),
                delim("="),
                Token::text("bar"),
                delim("|"),
                Token::text("baz"),
                ws(" "),
                Token::text("qux"),
                delim("|"),
                Token::text("34"),
            ]
        );
    }

    #[test]
    fn quoted_values_with_delimiters() {
        let tokens = Tokenizer::with_delimiters("=")
            .append(r#"k1=v1 k2="this is neat!" k3=v3"#)
            .flush();
        assert_eq!(
            tokens,
            vec![
                Token::text("k1"),
                delim("="),
                Token::text("v1"),
                ws(" "),
                Token::text("k2"),
                delim("="),
                quoted("this is neat!"),
                ws(" "),
                Token::text("k3"),
                delim("="),
                Token::text("v3"),
            ]
        );
    }

    #[test]
    fn delimiter_inside_quotes_is_content() {
        let tokens = Tokenizer::with_delimiters("=").append(r#""a=b""#).flush();
        assert_eq!(tokens, vec![quoted("a=b")]);
    }

    #[test]
    fn is_reusable_after_flush() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.append("hello world");
        assert_eq!(
            tokenizer.flush(),
            vec![Token::text("hello"), ws(" "), Token::text("world")]
        );

        tokenizer.append("another set");
        assert_eq!(
            tokenizer.flush(),
            vec![Token::text("another"), ws(" "), Token::text("set")]
        );
    }

    #[test]
    fn backslash_escapes_quotes_and_spaces() {
        assert_eq!(tokenize(r#"a\"b"#), vec![Token::text("a\"b")]);
        assert_eq!(tokenize(r"a\ b"), vec![Token::text("a b")]);
        assert_eq!(tokenize(r"a\\b"), vec![Token::text(r"a\b")]);
    }

    #[test]
    fn escaped_char_after_whitespace_starts_new_token() {
        assert_eq!(
            tokenize(r"a \b"),
            vec![Token::text("a"), ws(" "), Token::text("b")]
        );
    }

    #[test]
    fn unterminated_quote_is_still_quoted() {
        assert_eq!(tokenize(r#""abc def"#), vec![quoted("abc def")]);
    }

    #[test]
    fn empty_quotes_produce_nothing() {
        assert_eq!(tokenize(r#""""#), Vec::<Token>::new());
    }

    #[test]
    fn limit_discards_rest() {
        let mut tokenizer = Tokenizer::new().with_limit(1);
        tokenizer.append("first second third");
        assert_eq!(tokenizer.consumed(), "first ".len());
        assert_eq!(tokenizer.flush(), vec![Token::text("first")]);
    }

    #[test]
    fn split_command_plain() {
        let (word, rest) = split_command("echo hello   world").unwrap();
        assert_eq!(word, "echo");
        assert_eq!(rest, "hello   world");
    }

    #[test]
    fn split_command_quoted_word() {
        let (word, rest) = split_command(r#""my cmd" arg"#).unwrap();
        assert_eq!(word, "my cmd");
        assert_eq!(rest, "arg");
    }

    #[test]
    fn split_command_single_word() {
        let (word, rest) = split_command("pwd").unwrap();
        assert_eq!(word, "pwd");
        assert_eq!(rest, "");
    }

    #[test]
    fn split_command_multibyte() {
        let (word, rest) = split_command("échø ünïcode").unwrap();
        assert_eq!(word, "échø");
        assert_eq!(rest, "ünïcode");
    }

    #[test]
    fn split_command_empty() {
        assert!(split_command("").is_none());
    }

    #[test]
    fn join_reescapes_quoted_content() {
        let tokens = vec![
            Token::text("say"),
            ws(" "),
            quoted(r#"he said "hi" \o/"#),
            ws(" "),
            Token::new("it's", TokenKind::SingleQuoted),
        ];
        assert_eq!(join(&tokens), r#"say "he said \"hi\" \\o/" 'it\'s'"#);
    }

    #[test]
    fn escape_only_listed_chars() {
        assert_eq!(escape("a\"b'c", "\""), "a\\\"b'c");
    }
}
