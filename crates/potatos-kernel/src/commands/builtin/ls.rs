//! ls — List a directory.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::env::TAB;
use crate::error::ShellResult;

pub struct Ls;

#[async_trait]
impl CommandExecutor for Ls {
    fn short_description(&self) -> Option<&str> {
        Some("List files and folders")
    }

    fn help(&self) -> Option<&str> {
        Some(
            "Usage:\n  ls [path?]\n\n\
             List contents of path, or the current working directory if no path provided.\n\
             Prints the working directory first, then one $TAB-indented name per line.",
        )
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let fs = ctx.fs();
        let env = ctx.env();
        let nodes = fs.list(env, &ctx.args)?;
        let tab = env.get(TAB);

        ctx.println(&format!("cwd: {}", fs.cwd(env)));
        for id in nodes {
            ctx.println(&format!("{tab}{}", fs.name(id)));
        }
        Ok(0)
    }
}
