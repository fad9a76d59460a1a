//! The Kernel: one PotatOS session.
//!
//! The Kernel owns all session state behind a single lock:
//! - Environment (variables, `CWD`, `PROMPT`, ...)
//! - Virtual filesystem
//! - Command registry (built-ins and aliases)
//! - History
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    Kernel                             │
//! │  Mutex<ShellState>                                    │
//! │  ┌─────────────┐ ┌──────────────────┐ ┌────────────┐  │
//! │  │ Environment │ │ VirtualFileSystem│ │  History   │  │
//! │  └─────────────┘ └──────────────────┘ └────────────┘  │
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │ CommandRegistry (built-ins, UserDefinedAlias)   │  │
//! │  └─────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! One call to [`Kernel::invoke`] holds the lock for the whole line,
//! including any alias re-entry, so lines never interleave.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::Mutex;

use crate::commands::{
    CommandExecutor, CommandRegistry, ExecContext, ExitCode, register_builtins,
};
use crate::env::{CWD, Environment, HISTORY_MAX, PROMPT, TAB, USER};
use crate::error::{ShellError, ShellResult};
use crate::history::{self, History};
use crate::output::OutputSink;
use crate::tokenizer::split_command;
use crate::vfs::VirtualFileSystem;

/// Banner line identifying the system.
pub const OSID: &str = concat!("🥔 PotatOS ", env!("CARGO_PKG_VERSION"));

/// Configuration for session bootstrap.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Initial `USER`.
    pub user: String,
    /// Initial `PROMPT` template.
    pub prompt: String,
    /// Initial `TAB`.
    pub tab: String,
    /// Initial `HISTORY_MAX`. Negative keeps everything.
    pub history_max: i64,
    /// Whether to build the default filesystem or start with an empty root.
    pub seed_filesystem: bool,
    /// Extra variables written after the built-in ones.
    pub env: Vec<(String, String)>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            user: "spud".to_string(),
            prompt: "$CWD $".to_string(),
            tab: "  ".to_string(),
            history_max: 100,
            seed_filesystem: true,
            env: Vec::new(),
        }
    }
}

impl KernelConfig {
    /// Default variables over an empty filesystem.
    pub fn bare() -> Self {
        Self {
            seed_filesystem: false,
            ..Self::default()
        }
    }

    /// Add an extra environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Everything a session mutates.
#[derive(Debug)]
pub struct ShellState {
    pub env: Environment,
    pub fs: VirtualFileSystem,
    pub commands: CommandRegistry,
    pub history: History,
}

impl ShellState {
    /// Bootstrap a fresh session.
    pub fn new(config: &KernelConfig) -> ShellResult<Self> {
        let mut env = Environment::new();
        env.put(CWD, "/")?;
        env.put(USER, &config.user)?;
        env.put(TAB, &config.tab)?;
        env.put(HISTORY_MAX, config.history_max.to_string())?;
        env.put(PROMPT, &config.prompt)?;
        for (key, value) in &config.env {
            env.put(key, value)?;
        }

        let fs = if config.seed_filesystem {
            VirtualFileSystem::seeded(&env)?
        } else {
            VirtualFileSystem::new()
        };

        let mut commands = CommandRegistry::new();
        register_builtins(&mut commands)?;

        Ok(Self {
            env,
            fs,
            commands,
            history: History::new(),
        })
    }

    /// `PROMPT` with variables interpolated.
    pub fn prompt(&self) -> String {
        self.env.interpolate(self.env.get(PROMPT))
    }

    /// The `HISTORY_MAX` limit currently in force.
    pub fn history_limit(&self) -> Option<usize> {
        history::limit_from(self.env.get_number(HISTORY_MAX))
    }

    /// Append a line to history, honouring `HISTORY_MAX`.
    pub fn record_history(&mut self, line: &str) {
        let max = self.history_limit();
        self.history.push(line, max);
    }
}

/// Future returned by [`dispatch`].
pub(crate) type DispatchFuture<'a> =
    Pin<Box<dyn Future<Output = ShellResult<ExitCode>> + Send + 'a>>;

/// Parse the command word out of `line` and run it against `state`.
///
/// Boxed so aliases can recurse through it.
pub(crate) fn dispatch<'a>(
    line: &'a str,
    state: &'a mut ShellState,
    out: &'a dyn OutputSink,
    alias_chain: Vec<String>,
) -> DispatchFuture<'a> {
    Box::pin(async move {
        let Some((word, args)) = split_command(line.trim()) else {
            return Ok(0);
        };

        let Some(executor) = state.commands.get(&word) else {
            tracing::debug!("unknown command {:?}", word);
            return Err(ShellError::UnknownCommand(word));
        };

        tracing::debug!(command = %word, args = %args, depth = alias_chain.len(), "dispatch");
        let mut ctx = ExecContext::new(word, args, state, out).with_alias_chain(alias_chain);
        let result = executor.invoke(&mut ctx).await;
        if let Err(ref e) = result {
            tracing::debug!("{} failed: {}", ctx.command, e);
        }
        result
    })
}

/// A running shell session.
pub struct Kernel {
    state: Mutex<ShellState>,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    pub fn new(config: KernelConfig) -> ShellResult<Self> {
        let state = ShellState::new(&config)?;
        tracing::info!(
            user = %config.user,
            commands = state.commands.len(),
            seeded = config.seed_filesystem,
            "session started"
        );
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    /// A kernel with default variables and an empty filesystem.
    pub fn bare() -> ShellResult<Self> {
        Self::new(KernelConfig::bare())
    }

    /// Run one line of input.
    ///
    /// Blank lines do nothing and return `0`. Unknown commands and executor
    /// failures come back as errors. The session stays usable either way.
    pub async fn invoke(&self, line: &str, out: &dyn OutputSink) -> ShellResult<ExitCode> {
        let mut state = self.state.lock().await;
        dispatch(line, &mut state, out, Vec::new()).await
    }

    /// Register a command, as the `alias` command does.
    pub async fn register(
        &self,
        name: impl Into<String>,
        executor: impl CommandExecutor + 'static,
    ) -> ShellResult<()> {
        self.state.lock().await.commands.register(name, executor)
    }

    /// Append a line to history, honouring `HISTORY_MAX`.
    pub async fn record_history(&self, line: &str) {
        self.state.lock().await.record_history(line);
    }

    /// Replace history with `lines`, keeping the newest `HISTORY_MAX`.
    pub async fn load_history<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.lock().await;
        let mut loaded: History = lines.into_iter().collect();
        if let Some(max) = state.history_limit() {
            loaded.truncate(max);
        }
        state.history = loaded;
    }

    /// History entries, oldest first.
    pub async fn history(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state.history.iter().map(str::to_string).collect()
    }

    /// The interpolated prompt.
    pub async fn prompt(&self) -> String {
        self.state.lock().await.prompt()
    }

    /// Value of an environment variable, `""` when unset.
    pub async fn get_var(&self, key: &str) -> String {
        self.state.lock().await.env.get(key).to_string()
    }

    /// Set an environment variable.
    pub async fn set_var(&self, key: &str, value: impl Into<String>) -> ShellResult<()> {
        self.state.lock().await.env.put(key, value)
    }

    /// Current working directory.
    pub async fn cwd(&self) -> String {
        let state = self.state.lock().await;
        state.fs.cwd(&state.env).to_string()
    }

    /// Run `f` with exclusive access to the session state.
    pub async fn with_state<R>(&self, f: impl FnOnce(&mut ShellState) -> R) -> R {
        let mut state = self.state.lock().await;
        f(&mut state)
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel").finish_non_exhaustive()
    }
}
