//! env — Print every environment variable.

use async_trait::async_trait;

use crate::commands::{CommandExecutor, ExecContext, ExitCode};
use crate::error::ShellResult;

pub struct Env;

#[async_trait]
impl CommandExecutor for Env {
    fn short_description(&self) -> Option<&str> {
        Some("Display environment values")
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        let mut vars: Vec<_> = ctx.env().iter().collect();
        vars.sort_by_key(|(key, _)| *key);
        for (key, value) in vars {
            ctx.println(&format!("{key}={value}"));
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelConfig, ShellState};
    use crate::output::BufferedOutput;

    #[tokio::test]
    async fn test_env_sorted() {
        let mut state = ShellState::new(&KernelConfig::bare()).unwrap();
        state.env.put("AAA", "first").unwrap();
        let out = BufferedOutput::new();
        let mut ctx = ExecContext::new("env", "", &mut state, &out);

        Env.invoke(&mut ctx).await.unwrap();
        assert_eq!(
            out.stdout(),
            "AAA=first\nCWD=/\nHISTORY_MAX=100\nPROMPT=$CWD $\nTAB=  \nUSER=spud"
        );
    }
}
