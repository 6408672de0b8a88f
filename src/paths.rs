//! Centralized path definitions for refwatch
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/refwatch/
//! └── config.toml               # Host settings
//!
//! ~/.local/share/refwatch/      # Match state (key-value store)
//! ├── 0.bin                     # Match record
//! ├── 1.bin .. 4.bin            # Event logs
//! └── 100.bin                   # Game configuration
//! ```
//!
//! Setting `REFWATCH_HOME` moves both under one directory:
//! `$REFWATCH_HOME/config.toml` and `$REFWATCH_HOME/state/`.

use std::path::PathBuf;

/// Environment variable that relocates settings and state
pub const HOME_ENV: &str = "REFWATCH_HOME";

/// Application directory name
const APP_DIR: &str = "refwatch";

/// Settings filename
const SETTINGS_FILE: &str = "config.toml";

/// State subdirectory under `REFWATCH_HOME`
const STATE_DIR: &str = "state";

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Path of the host settings file
#[must_use]
pub fn settings_file() -> PathBuf {
    home_override().map_or_else(
        || {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join(SETTINGS_FILE)
        },
        |home| home.join(SETTINGS_FILE),
    )
}

/// Default directory for match state
#[must_use]
pub fn data_dir() -> PathBuf {
    home_override().map_or_else(
        || {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        },
        |home| home.join(STATE_DIR),
    )
}
