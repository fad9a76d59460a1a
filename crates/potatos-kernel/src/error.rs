//! Error type shared by every layer of the kernel.
//!
//! Parsing, filesystem and dispatch failures are all values of
//! [`ShellError`]. None of them end the session: the dispatcher hands them back
//! to the caller, which usually prints the message and reads the next line.

use thiserror::Error;

/// Everything that can go wrong while interpreting a line.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Malformed `key=value` group. Carries the offending text.
    #[error("Syntax error: Expected \"key=value\" syntax. Got {0}")]
    Syntax(String),

    /// Attempt to write an environment variable with an empty name.
    #[error("Error: Cannot put empty key in environment.")]
    EmptyKey,

    /// The first word of a line is not in the command registry.
    #[error("Unknown command \"{0}\"\nType \"help\" if you need some.")]
    UnknownCommand(String),

    /// A path segment does not exist under its parent directory.
    #[error("No node named \"{name}\" found in parent \"{parent}\".")]
    NoSuchNode { name: String, parent: String },

    /// A path walk hit a file where a directory was needed.
    #[error("Unexpected non-directory node \"{0}\"")]
    NotADirectory(String),

    /// `cd` (or `rm /`) was given a path it cannot use.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A directory already holds a child with this name.
    #[error("{parent} already contains a file named {child}")]
    DuplicateName { parent: String, child: String },

    /// Registration would overwrite a command flagged immutable.
    #[error("{0} cannot be overridden.")]
    ImmutableCommand(String),

    /// An alias re-entered itself, directly or through other aliases.
    #[error("Alias cycle detected: {}", .0.join(" -> "))]
    CyclicAlias(Vec<String>),

    /// Anything else an executor reports.
    #[error(transparent)]
    Command(#[from] anyhow::Error),
}

impl ShellError {
    /// Build a [`ShellError::NoSuchNode`].
    pub fn no_such_node(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::NoSuchNode {
            name: name.into(),
            parent: parent.into(),
        }
    }

    /// Build a [`ShellError::DuplicateName`].
    pub fn duplicate_name(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::DuplicateName {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

/// Result alias used throughout the kernel.
pub type ShellResult<T> = Result<T, ShellError>;
