//! write — Create a text file.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;
use crate::tokenizer::split_command;
use crate::vfs::Blob;

pub struct Write;

#[async_trait]
impl CommandExecutor for Write {
    fn short_description(&self) -> Option<&str> {
        Some("Create a text file")
    }

    fn help(&self) -> Option<&str> {
        Some(
            "Usage:\n  write [file path] [content...]\n\n\
             Creates a new text file. The parent directory must exist, and the file must not.",
        )
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let Some((path, content)) = split_command(&ctx.args) else {
            ctx.printerr("Usage: write [file path] [content...]");
            return Ok(1);
        };
        let blob = Blob::plain(content);

        let state = &mut *ctx.state;
        state.fs.create_file(&state.env, &path, blob)?;
        Ok(0)
    }
}
