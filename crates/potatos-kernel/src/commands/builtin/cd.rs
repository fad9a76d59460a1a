//! cd — Change the working directory.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Cd;

#[async_trait]
impl CommandExecutor for Cd {
    fn short_description(&self) -> Option<&str> {
        Some("Change current working directory")
    }

    fn help(&self) -> Option<&str> {
        Some("Usage:\n  cd [path]\n\nChange the current working directory.")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let state = &mut *ctx.state;
        state.fs.cd(&mut state.env, &ctx.args)?;
        Ok(0)
    }
}
