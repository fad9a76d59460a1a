//! REPL configuration file.
//!
//! ```toml
//! user = "tater"
//! prompt = "$USER@$CWD >"
//! history_max = 500
//!
//! [env]
//! EDITOR = "nano"
//! ```
//!
//! Every field is optional. Anything left out keeps the
//! [`KernelConfig`] default.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use potatos_kernel::KernelConfig;

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    pub user: Option<String>,
    pub prompt: Option<String>,
    pub tab: Option<String>,
    pub history_max: Option<i64>,
    pub seed_filesystem: Option<bool>,
    /// Persist history between sessions. Defaults to on.
    pub save_history: Option<bool>,
    pub env: BTreeMap<String, String>,
}

impl ReplConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    /// Read the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_history(&self) -> bool {
        self.save_history.unwrap_or(true)
    }

    /// Overlay the present fields onto the kernel defaults.
    pub fn kernel_config(&self) -> KernelConfig {
        let mut config = KernelConfig::default();
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if let Some(tab) = &self.tab {
            config.tab = tab.clone();
        }
        if let Some(max) = self.history_max {
            config.history_max = max;
        }
        if let Some(seed) = self.seed_filesystem {
            config.seed_filesystem = seed;
        }
        for (key, value) in &self.env {
            config = config.with_env(key, value);
        }
        config
    }
}
