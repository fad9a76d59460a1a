//! echo — Print arguments with variables interpolated.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Echo;

#[async_trait]
impl CommandExecutor for Echo {
    fn short_description(&self) -> Option<&str> {
        Some("Say something")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let line = ctx.env().interpolate(&ctx.args);
        ctx.println(&line);
        Ok(0)
    }
}
