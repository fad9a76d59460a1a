//! XDG Base Directory paths for PotatOS state.
//!
//! | Purpose | XDG Variable | Default | PotatOS Path |
//! |---------|--------------|---------|--------------|
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/potatos/config.toml` |
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/potatos/history.txt` |
//!
//! `POTATOS_CONFIG` overrides the config file location.

use std::path::PathBuf;

use directories::BaseDirs;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "POTATOS_CONFIG";

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/potatos` or falls back to `~/.config/potatos`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join("potatos")
}

/// Get the data directory for persistent state.
///
/// Uses `$XDG_DATA_HOME/potatos` or falls back to `~/.local/share/potatos`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("potatos")
}

/// The config file to read: `$POTATOS_CONFIG` if set, else `config.toml`
/// in [`config_dir`].
pub fn config_file() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir().join("config.toml"))
}

/// Where session history is persisted.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
