//! Parameter file loading.
//!
//! A parameter file holds a map of named launch profiles; every profile runs
//! as its own concurrent launch. The format is chosen by extension (YAML,
//! JSON, or TOML). Unreadable or malformed files degrade to an empty profile
//! map, logged, never fatal.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bstart::LaunchMode;
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LaunchProfile {
    /// Names of detected browsers to launch.
    pub browser_names: Vec<String>,
    /// Explicit executable paths to launch (registered under themselves).
    pub browser_paths: Vec<PathBuf>,
    pub urls: Vec<String>,
    pub mode: LaunchMode,
}

pub type ProfileMap = BTreeMap<String, LaunchProfile>;

pub fn load_parameter_file(path: &Path) -> ProfileMap {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(target = "bstart", path = %path.display(), error = %err, "parameter file unreadable");
            return ProfileMap::new();
        }
    };

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&content).map_err(|err| err.to_string())
        }
        Some("json") => serde_json::from_str(&content).map_err(|err| err.to_string()),
        Some("toml") => toml::from_str(&content).map_err(|err| err.to_string()),
        other => {
            warn!(target = "bstart", path = %path.display(), extension = ?other, "unsupported parameter file format");
            return ProfileMap::new();
        }
    };

    parsed.unwrap_or_else(|err| {
        error!(target = "bstart", path = %path.display(), error = %err, "failed to parse parameter file");
        ProfileMap::new()
    })
}
