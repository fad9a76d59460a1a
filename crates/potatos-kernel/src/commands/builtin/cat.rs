//! cat — Print the contents of a text file.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Cat;

#[async_trait]
impl CommandExecutor for Cat {
    fn short_description(&self) -> Option<&str> {
        Some("Show contents of a text file")
    }

    fn help(&self) -> Option<&str> {
        Some("Usage:\n  cat [file path]\n\nDumps the contents of a text file to the screen.")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let id = ctx.fs().get(ctx.env(), &ctx.args)?;
        let node = &ctx.fs()[id];
        let Some(blob) = node.blob() else {
            ctx.printerr(&format!("\"{}\" is not a file.", node.name()));
            return Ok(1);
        };
        ctx.println(&blob.text());
        Ok(0)
    }
}
