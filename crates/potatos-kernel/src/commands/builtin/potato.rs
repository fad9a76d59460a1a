//! potato — Print a potato.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Potato;

#[async_trait]
impl CommandExecutor for Potato {
    fn short_description(&self) -> Option<&str> {
        Some("Print a cute, little potato")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        ctx.println("🥔");
        Ok(0)
    }
}
