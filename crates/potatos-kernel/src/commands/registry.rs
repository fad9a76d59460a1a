//! Command registry for looking up and managing executors.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{CommandExecutor, UserDefinedAlias};
use crate::error::{ShellError, ShellResult};

/// Name-to-executor map, in registration order.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    commands: IndexMap<String, Arc<dyn CommandExecutor>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `executor` under `name`, replacing any mutable entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        executor: impl CommandExecutor + 'static,
    ) -> ShellResult<()> {
        self.register_arc(name, Arc::new(executor))
    }

    /// Register an executor that's already in an Arc.
    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        executor: Arc<dyn CommandExecutor>,
    ) -> ShellResult<()> {
        let name = name.into();
        if self.commands.get(&name).is_some_and(|c| c.immutable()) {
            return Err(ShellError::ImmutableCommand(name));
        }
        tracing::debug!("registering command {}", name);
        self.commands.insert(name, executor);
        Ok(())
    }

    /// Look up an executor by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandExecutor>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Registered aliases in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &UserDefinedAlias)> {
        self.commands
            .iter()
            .filter_map(|(name, c)| c.as_alias().map(|alias| (name.as_str(), alias)))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
