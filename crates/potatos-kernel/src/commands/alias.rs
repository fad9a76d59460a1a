//! User-defined aliases.

use async_trait::async_trait;

use super::{CommandExecutor, ExecContext, ExitCode};
use crate::error::{ShellError, ShellResult};

/// A stored command line, re-dispatched with the caller's arguments
/// appended.
///
/// An alias that is re-entered while it is already running fails with
/// [`ShellError::CyclicAlias`] instead of recursing. Since an alias always
/// expands to the same text, re-entering it can never terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDefinedAlias {
    command: String,
}

impl UserDefinedAlias {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The stored command line.
    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl CommandExecutor for UserDefinedAlias {
    fn as_alias(&self) -> Option<&UserDefinedAlias> {
        Some(self)
    }

    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode> {
        if ctx.alias_chain().contains(&ctx.command) {
            let mut chain = ctx.alias_chain().to_vec();
            chain.push(ctx.command.clone());
            tracing::warn!("alias cycle detected: {}", chain.join(" -> "));
            return Err(ShellError::CyclicAlias(chain));
        }

        let line = format!("{} {}", self.command, ctx.args);
        ctx.reenter(&line).await
    }
}
