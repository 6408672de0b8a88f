//! Host settings
//!
//! Preferences for the `refwatch` command itself, kept apart from the game
//! configuration that lives in the key-value store. Settings are stored as
//! TOML at `~/.config/refwatch/config.toml` (XDG standard), or at
//! `$REFWATCH_HOME/config.toml` when that variable is set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Host settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Where match state is kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Expiry alert preferences
    #[serde(default)]
    pub alerts: AlertConfig,
}

/// Storage preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the state directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Expiry alert preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Ring the terminal bell when the clock expires
    #[serde(default = "default_bell")]
    pub bell: bool,
}

const fn default_bell() -> bool {
    true
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            bell: default_bell(),
        }
    }
}

impl HostConfig {
    /// Get the settings file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::settings_file()
    }

    /// Load settings from the default path
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// State directory: the explicit override, the settings value, or the default
    #[must_use]
    pub fn data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .unwrap_or_else(paths::data_dir)
    }
}
