//! Commands: the executor capability, the registry, and the built-ins.
//!
//! Every command is a [`CommandExecutor`] stored in the [`CommandRegistry`]
//! under the name that invokes it. Built-ins are registered at session start.
//! User aliases ([`UserDefinedAlias`]) are added by the `alias` command and
//! re-enter the dispatcher with their stored command line.

mod alias;
mod builtin;
mod context;
mod registry;

pub use alias::UserDefinedAlias;
pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::CommandRegistry;

use async_trait::async_trait;

use crate::error::ShellResult;

/// Process-style status returned by a command. `0` is success.
pub type ExitCode = i32;

/// Behaviour of one named command.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// One-line summary shown by `help`. Commands without one are hidden.
    fn short_description(&self) -> Option<&str> {
        None
    }

    /// Long usage text shown by `help <command>`.
    fn help(&self) -> Option<&str> {
        None
    }

    /// Immutable commands cannot be replaced in the registry.
    fn immutable(&self) -> bool {
        false
    }

    /// Downcast hook for listing aliases.
    fn as_alias(&self) -> Option<&UserDefinedAlias> {
        None
    }

    /// Run the command.
    async fn invoke(&self, ctx: &mut ExecContext<'_>) -> ShellResult<ExitCode>;
}
