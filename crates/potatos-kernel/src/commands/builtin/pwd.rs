//! pwd — Print the working directory.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Pwd;

#[async_trait]
impl CommandExecutor for Pwd {
    fn short_description(&self) -> Option<&str> {
        Some("Print current working directory")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let cwd = ctx.fs().cwd(ctx.env()).to_string();
        ctx.println(&cwd);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CWD;
    use crate::kernel::{KernelConfig, ShellState};
    use crate::output::BufferedOutput;

    #[tokio::test]
    async fn test_pwd() {
        let mut state = ShellState::new(&KernelConfig::bare()).unwrap();
        state.env.put(CWD, "/home/spud").unwrap();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("pwd", "", &mut state, &out);

        Pwd.invoke(&mut ctx).await.unwrap();
        assert_eq!(out.stdout(), "/home/spud");
    }
}
