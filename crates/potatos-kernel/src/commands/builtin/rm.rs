//! rm — Remove a file.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Rm;

#[async_trait]
impl CommandExecutor for Rm {
    fn short_description(&self) -> Option<&str> {
        Some("Remove a file")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let id = ctx.fs().get(ctx.env(), &ctx.args)?;
        if !ctx.fs()[id].is_file() {
            ctx.printerr(&format!("{} is not a file.", ctx.fs().name(id)));
            return Ok(1);
        }
        ctx.state.fs.remove_node(id)?;
        Ok(0)
    }
}
