//! Per-user directory and settings file.
//!
//! Everything the tool persists lives under `~/.bstart`: `settings.json`
//! with timing overrides and a `log/` directory for the rolling log files.
//! A missing or malformed settings file falls back to defaults.

use std::path::{Path, PathBuf};

use bstart::DEFAULT_COUNTDOWN_SECONDS;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Seconds before the start page closes its own tab.
    pub countdown_seconds: u32,
    /// Wait after starting a browser before opening URLs (ms).
    pub init_delay_ms: u64,
    /// Wait after each URL open (ms).
    pub open_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            init_delay_ms: 3000,
            open_delay_ms: 500,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        match root_dir() {
            Some(root) => Self::load_from(&root.join(SETTINGS_FILE)),
            None => {
                warn!(target = "bstart", "home directory unavailable; using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(target = "bstart", path = %path.display(), "no settings file; using defaults");
                return Self::default();
            }
            Err(err) => {
                warn!(target = "bstart", path = %path.display(), error = %err, "settings unreadable; using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(target = "bstart", path = %path.display(), error = %err, "settings malformed; using defaults");
            Self::default()
        })
    }
}

/// Per-user root for settings, parameter files, and logs.
pub fn root_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bstart"))
}

pub fn log_dir() -> Option<PathBuf> {
    root_dir().map(|root| root.join("log"))
}

/// Parameter file used when `--parameter-file` is given without a value.
pub fn default_parameter_file() -> Option<PathBuf> {
    root_dir().map(|root| root.join("parameter.yaml"))
}
