//! mkdirp — Create a directory and any missing parents.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Mkdirp;

#[async_trait]
impl CommandExecutor for Mkdirp {
    fn short_description(&self) -> Option<&str> {
        Some("Create directories")
    }

    fn help(&self) -> Option<&str> {
        Some("Usage:\n  mkdirp [path]\n\nCreate the provided path if it does not exist.")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let state = &mut *ctx.state;
        state.fs.mkdirp(&state.env, &ctx.args)?;
        Ok(0)
    }
}
