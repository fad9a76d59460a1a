//! alias — List aliases, or define them from `name=command` pairs.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode, UserDefinedAlias};
use crate::error::ShellResult;
use crate::kv::parse_key_value_pairs;

pub struct Alias;

#[async_trait]
impl CommandExecutor for Alias {
    fn short_description(&self) -> Option<&str> {
        Some("List and create aliases for commands")
    }

    fn help(&self) -> Option<&str> {
        Some(
            "Usage:\n  alias\n  alias [name=\"command...\"]\n\n\
             With no arguments, lists defined aliases.\n\
             Otherwise defines each alias.\n\n\
             Pairs are read from the end of the line backward, three tokens at a\n\
             time, so a command with spaces must be quoted.\n\
             alias greet=\"echo hello\" defines greet.\n\
             alias greet=echo hello is a syntax error (Got =echohello).",
        )
    }

    fn immutable(&self) -> bool {
        true
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        if ctx.args.is_empty() {
            let lines: Vec<String> = ctx
                .state
                .commands
                .aliases()
                .map(|(name, alias)| format!("{name}={}", alias.command()))
                .collect();
            if lines.is_empty() {
                ctx.println("No aliases defined.");
            }
            for line in lines {
                ctx.println(&line);
            }
            return Ok(0);
        }

        for pair in parse_key_value_pairs(&ctx.args) {
            let pair = match pair {
                Ok(pair) => pair,
                Err(e) => {
                    ctx.printerr(&e.to_string());
                    continue;
                }
            };
            if pair.value.is_empty() {
                ctx.printerr(&format!(
                    "Error: Alias {} cannot be empty. Maybe try using double quotes.",
                    pair.key
                ));
                continue;
            }
            let registered = ctx
                .state
                .commands
                .register(pair.key, UserDefinedAlias::new(pair.value));
            if let Err(e) = registered {
                ctx.printerr(&e.to_string());
            }
        }
        Ok(0)
    }
}
