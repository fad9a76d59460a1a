//! history — List or clear previously entered lines.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct HistoryCommand;

#[async_trait]
impl CommandExecutor for HistoryCommand {
    fn short_description(&self) -> Option<&str> {
        Some("List previously used commands")
    }

    fn help(&self) -> Option<&str> {
        Some(
            "Usage:\n  history [--clear]\n\n\
             With no arguments, displays your previously used commands up to $HISTORY_MAX.\n\n\
             When the --clear argument is supplied, clears your stored history.",
        )
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        if ctx.args == "--clear" {
            ctx.state.history.clear();
            return Ok(0);
        }
        for (i, line) in ctx.state.history.iter().enumerate() {
            ctx.println(&format!("{i} {line}"));
        }
        Ok(0)
    }
}
