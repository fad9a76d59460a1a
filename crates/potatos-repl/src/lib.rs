//! potatos-repl: the interactive PotatOS terminal.
//!
//! Wraps a [`Kernel`] in a rustyline editor:
//!
//! - Prompt built from `$PROMPT` before every line
//! - Errors printed to stderr in red, then the next line is read
//! - History persisted to the XDG data directory between sessions
//! - Settings read from `config.toml` (see [`config`])

pub mod config;
pub mod paths;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use potatos_kernel::{ExitCode, Kernel, KernelConfig, OSID, OutputSink};

pub use config::ReplConfig;

/// Writes command output straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalOutput;

impl OutputSink for TerminalOutput {
    fn println(&self, line: &str) {
        println!("{line}");
    }

    fn printerr(&self, line: &str) {
        eprintln!("{}", line.red());
    }
}

/// One interactive session.
pub struct Repl {
    kernel: Kernel,
    history_file: Option<PathBuf>,
}

impl Repl {
    /// A REPL over a default session, without history persistence.
    pub fn new() -> Result<Self> {
        Self::with_kernel_config(KernelConfig::default())
    }

    pub fn with_kernel_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("failed to start session")?;
        Ok(Self {
            kernel,
            history_file: None,
        })
    }

    /// Build a REPL from a config file, persisting history to `history_file`
    /// unless the config turns that off.
    pub fn from_config(config: &ReplConfig, history_file: PathBuf) -> Result<Self> {
        let mut repl = Self::with_kernel_config(config.kernel_config())?;
        if config.save_history() {
            repl.history_file = Some(history_file);
        }
        Ok(repl)
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn history_file(&self) -> Option<&Path> {
        self.history_file.as_deref()
    }

    /// Run one line, printing any error to `out`, then add it to history.
    ///
    /// The line is trimmed first. It is recorded whether or not the command
    /// succeeded, under whatever `HISTORY_MAX` the command left behind.
    /// Returns the command's exit code, or `1` when it failed.
    pub async fn process_line(&self, line: &str, out: &dyn OutputSink) -> ExitCode {
        let line = line.trim();
        if line.is_empty() {
            return 0;
        }
        let code = match self.kernel.invoke(line, out).await {
            Ok(code) => code,
            Err(e) => {
                out.printerr(&e.to_string());
                1
            }
        };
        self.kernel.record_history(line).await;
        code
    }

    /// Seed session history from the history file, if there is one.
    ///
    /// Returns the loaded lines so the editor can share them.
    pub async fn load_history(&self) -> Result<Vec<String>> {
        let Some(path) = &self.history_file else {
            return Ok(Vec::new());
        };
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        self.kernel.load_history(lines.iter().cloned()).await;
        tracing::debug!("loaded {} history lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    /// Write session history back to the history file, if there is one.
    pub async fn save_history(&self) -> Result<()> {
        let Some(path) = &self.history_file else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut text = self.kernel.history().await.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }
}

impl std::fmt::Debug for Repl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repl")
            .field("history_file", &self.history_file)
            .finish_non_exhaustive()
    }
}

/// Run the interactive loop until EOF.
pub fn run(config: ReplConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let repl = Repl::from_config(&config, paths::history_file())?;
    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    for line in runtime.block_on(repl.load_history())? {
        let _ = rl.add_history_entry(line);
    }

    println!("{}", OSID.bold());
    println!("Type \"help\" to see available commands.\n");

    let out = TerminalOutput;
    loop {
        let prompt = format!("{} ", runtime.block_on(repl.kernel().prompt()));

        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                runtime.block_on(repl.process_line(&line, &out));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(e) = runtime.block_on(repl.save_history()) {
        tracing::warn!("failed to save history: {:#}", e);
    }
    Ok(())
}
