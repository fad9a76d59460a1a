//! set — Assign environment variables from `key=value` pairs.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;
use crate::kv::parse_key_value_pairs;

const KEY_PATTERN: &str = "^[A-Za-z0-9_-]+$";

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(KEY_PATTERN).expect("key pattern is valid")
});

pub struct Set;

#[async_trait]
impl CommandExecutor for Set {
    fn short_description(&self) -> Option<&str> {
        Some("Set an environment value")
    }

    fn help(&self) -> Option<&str> {
        Some(
            "Usage:\n  set [key=value...]\n\n\
             Assigns one or more environment values. Quote values that contain spaces.",
        )
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        for pair in parse_key_value_pairs(&ctx.args) {
            match pair {
                Ok(pair) if KEY_RE.is_match(&pair.key) => {
                    ctx.env_mut().put(&pair.key, pair.value)?;
                }
                Ok(pair) => {
                    ctx.printerr(&format!("Error: {} must match pattern /{KEY_PATTERN}/", pair.key));
                }
                Err(e) => ctx.printerr(&e.to_string()),
            }
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelConfig, ShellState};
    use crate::output::BufferedOutput;

    fn make_state() -> ShellState {
        ShellState::new(&KernelConfig::bare()).unwrap()
    }

    #[tokio::test]
    async fn test_set_several() {
        let mut state = make_state();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("set", r#"A=1 B="two words" C="#, &mut state, &out);

        assert_eq!(Set.invoke(&mut ctx).await.unwrap(), 0);
        assert_eq!(state.env.get("A"), "1");
        assert_eq!(state.env.get("B"), "two words");
        assert!(state.env.contains("C"));
        assert_eq!(state.env.get("C"), "");
        assert!(out.lines().is_empty());
    }

    #[tokio::test]
    async fn test_set_bad_key() {
        let mut state = make_state();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("set", "a.b=1 ok=2", &mut state, &out);

        assert_eq!(Set.invoke(&mut ctx).await.unwrap(), 0);
        assert_eq!(out.stderr(), "Error: a.b must match pattern /^[A-Za-z0-9_-]+$/");
        assert!(!state.env.contains("a.b"));
        assert_eq!(state.env.get("ok"), "2");
    }

    #[tokio::test]
    async fn test_set_syntax_error() {
        let mut state = make_state();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("set", "lonely", &mut state, &out);

        assert_eq!(Set.invoke(&mut ctx).await.unwrap(), 0);
        assert_eq!(
            out.stderr(),
            "Syntax error: Expected \"key=value\" syntax. Got lonely"
        );
    }
}
