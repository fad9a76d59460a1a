//! Tokenizer and key/value parser tests.

use potatos_kernel::ShellError;
use potatos_kernel::kv::{KeyValuePair, parse_key_value_pairs};
use potatos_kernel::tokenizer::{Token, TokenKind, Tokenizer, join, tokenize};
use proptest::prelude::*;
use rstest::rstest;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn contents(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.content.as_str()).collect()
}

// =============================================================================
// TOKENIZER
// =============================================================================

#[rstest]
#[case::plain("ls /tmp", &["ls", " ", "/tmp"])]
#[case::quoted_arg(r#"echo "a  b" c"#, &["echo", " ", "a  b", " ", "c"])]
#[case::quote_glued_to_text(r#"pre"mid"post"#, &["pre", "mid", "post"])]
#[case::escaped_space(r"cat my\ file", &["cat", " ", "my file"])]
#[case::escaped_quote(r#"say \"hi\""#, &["say", " ", "\"hi\""])]
#[case::tabs_and_newlines("a\t\n b", &["a", "\t\n ", "b"])]
#[case::unicode_whitespace("a\u{3000}b", &["a", "\u{3000}", "b"])]
#[case::only_whitespace("   ", &["   "])]
#[case::empty("", &[])]
fn tokenize_contents(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(contents(&tokenize(input)), expected);
}

#[test]
fn tokenize_with_equals_delimiter() {
    let tokens = Tokenizer::with_delimiters("=")
        .append(r#"k1=v1 k2="this is neat!" k3=v3"#)
        .flush();

    assert_eq!(
        contents(&tokens),
        vec!["k1", "=", "v1", " ", "k2", "=", "this is neat!", " ", "k3", "=", "v3"]
    );
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Text,
            TokenKind::Delimiter,
            TokenKind::Text,
            TokenKind::Whitespace,
            TokenKind::Text,
            TokenKind::Delimiter,
            TokenKind::DoubleQuoted,
            TokenKind::Whitespace,
            TokenKind::Text,
            TokenKind::Delimiter,
            TokenKind::Text,
        ]
    );
}

#[test]
fn appends_accumulate_until_flush() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.append("hel").append("lo wo").append("rld");
    assert_eq!(contents(&tokenizer.flush()), vec!["hello", " ", "world"]);
    assert!(tokenizer.flush().is_empty());
}

#[rstest]
#[case::plain("echo hi")]
#[case::quoted(r#"echo "hi there""#)]
#[case::quote_inside_quotes(r#"echo "say \"hi\"""#)]
#[case::backslash_inside_quotes(r#"echo "C:\\potato""#)]
#[case::leading_and_trailing_space("  ls  ")]
fn join_round_trips(#[case] line: &str) {
    assert_eq!(join(&tokenize(line)), line);
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9=._/-]{1,8}",
        "[ \t]{1,3}",
        "[a-z !=']{1,10}".prop_map(|s| format!("\"{s}\"")),
        r#"[a-z]{0,3}(\\"|\\\\)[a-z]{0,3}"#.prop_map(|s| format!("\"{s}\"")),
    ]
}

proptest! {
    #[test]
    fn join_inverts_tokenize(segments in prop::collection::vec(segment(), 0..8)) {
        let line = segments.concat();
        prop_assert_eq!(join(&tokenize(&line)), line);
    }

    #[test]
    fn whitespace_tokens_are_pure(line in "[a-z \t\"]{0,24}") {
        for token in tokenize(&line) {
            if token.kind == TokenKind::Whitespace {
                prop_assert!(token.content.chars().all(char::is_whitespace));
            } else if token.kind == TokenKind::Text {
                prop_assert!(!token.content.chars().any(char::is_whitespace));
            }
        }
    }
}

// =============================================================================
// KEY/VALUE PAIRS
// =============================================================================

#[rstest]
#[case::single("a=1", &[("a", "1")])]
#[case::several("k1=v1 k2= k3=v3", &[("k1", "v1"), ("k2", ""), ("k3", "v3")])]
#[case::spaces_around_equals("a = 1", &[("a", "1")])]
#[case::quoted_value(r#"PROMPT="$USER > ""#, &[("PROMPT", "$USER > ")])]
#[case::quoted_key(r#""odd key"=x"#, &[("odd key", "x")])]
#[case::trailing_empty("only=", &[("only", "")])]
fn kv_pairs(#[case] input: &str, #[case] expected: &[(&str, &str)]) {
    let parsed: Vec<KeyValuePair> = parse_key_value_pairs(input)
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    let expected: Vec<KeyValuePair> = expected
        .iter()
        .map(|(k, v)| KeyValuePair::new(*k, *v))
        .collect();
    assert_eq!(parsed, expected);
}

#[rstest]
#[case::lone_key("k1", "k1")]
#[case::nothing("", "")]
#[case::lone_equals("=", "=")]
#[case::no_delimiters("k1 v1 k2 v2", "v1k2v2")]
#[case::missing_key("=v", "=v")]
fn kv_syntax_errors(#[case] input: &str, #[case] got: &str) {
    let parsed = parse_key_value_pairs(input);
    assert_eq!(parsed.len(), 1);
    match &parsed[0] {
        Err(ShellError::Syntax(text)) => assert_eq!(text, got),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}
