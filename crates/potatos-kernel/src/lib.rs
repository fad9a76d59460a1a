//! potatos-kernel: the core of PotatOS.
//!
//! This crate provides:
//!
//! - **Tokenizer**: quote- and escape-aware line splitting
//! - **Key/value parser**: `key=value` arguments for `set` and `alias`
//! - **Environment**: session variables with `$NAME` interpolation
//! - **VFS**: an in-memory directory tree with POSIX-like paths
//! - **Commands**: executor trait, registry, aliases and built-ins
//! - **Kernel**: the dispatcher that ties a session together
//!
//! ```
//! use potatos_kernel::{BufferedOutput, Kernel, KernelConfig};
//!
//! # tokio_test_block(async {
//! let kernel = Kernel::new(KernelConfig::default()).unwrap();
//! let out = BufferedOutput::new();
//! kernel.invoke("echo hello $USER", &out).await.unwrap();
//! assert_eq!(out.stdout(), "hello spud");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod commands;
pub mod env;
pub mod error;
pub mod format;
pub mod history;
pub mod kernel;
pub mod kv;
pub mod output;
pub mod tokenizer;
pub mod vfs;

pub use commands::{CommandExecutor, CommandRegistry, ExecContext, ExitCode, UserDefinedAlias};
pub use env::Environment;
pub use error::{ShellError, ShellResult};
pub use kernel::{Kernel, KernelConfig, OSID, ShellState};
pub use output::{BufferedOutput, OutputLine, OutputSink};
pub use vfs::VirtualFileSystem;
