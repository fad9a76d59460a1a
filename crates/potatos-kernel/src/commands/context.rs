//! Invocation context handed to executors.

use crate::env::Environment;
use crate::error::ShellResult;
use crate::kernel::{ShellState, dispatch};
use crate::output::OutputSink;
use crate::vfs::VirtualFileSystem;

use super::ExitCode;

/// Everything a command can see and touch while it runs.
pub struct ExecContext<'a> {
    /// The word the command was invoked as.
    pub command: String,
    /// Raw, trimmed text after the command word.
    pub args: String,
    /// Session state: environment, filesystem, registry and history.
    pub state: &'a mut ShellState,
    out: &'a dyn OutputSink,
    alias_chain: Vec<String>,
}

impl<'a> ExecContext<'a> {
    pub fn new(
        command: impl Into<String>,
        args: impl Into<String>,
        state: &'a mut ShellState,
        out: &'a dyn OutputSink,
    ) -> Self {
        Self {
            command: command.into(),
            args: args.into(),
            state,
            out,
            alias_chain: Vec::new(),
        }
    }

    pub(crate) fn with_alias_chain(mut self, alias_chain: Vec<String>) -> Self {
        self.alias_chain = alias_chain;
        self
    }

    pub fn println(&self, line: &str) {
        self.out.println(line);
    }

    pub fn printerr(&self, line: &str) {
        self.out.printerr(line);
    }

    pub fn env(&self) -> &Environment {
        &self.state.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.state.env
    }

    pub fn fs(&self) -> &VirtualFileSystem {
        &self.state.fs
    }

    /// Aliases entered so far on the way to this command, outermost first.
    pub fn alias_chain(&self) -> &[String] {
        &self.alias_chain
    }

    /// Dispatch `line` as if typed, on behalf of this command.
    ///
    /// The current command's name is appended to the alias chain of the
    /// nested invocation. The session lock is already held, so nothing is
    /// re-locked.
    pub async fn reenter(&mut self, line: &str) -> ShellResult<ExitCode> {
        let mut chain = self.alias_chain.clone();
        chain.push(self.command.clone());
        dispatch(line, &mut *self.state, self.out, chain).await
    }
}

impl std::fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("command", &self.command)
            .field("args", &self.args)
            .field("alias_chain", &self.alias_chain)
            .finish_non_exhaustive()
    }
}
