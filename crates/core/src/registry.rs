//! In-memory browser registry.
//!
//! An explicit name -> executable-path map that is fully populated before any
//! launch begins and read-only afterwards. Callers construct one, fill it from
//! [`discovery`](crate::discovery) or from user-supplied paths, and hand it to
//! the launcher.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discovery;
use crate::error::{BstartError, Result};
use crate::launcher::BrowserEntry;

#[derive(Debug, Clone, Default)]
pub struct BrowserRegistry {
    browsers: BTreeMap<String, PathBuf>,
}

impl BrowserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a browser under `name`. Re-registering an existing name
    /// overwrites its path (last registration wins).
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let name = name.into();
        let path = path.into();
        debug!(target = "bstart", browser = %name, path = %path.display(), "registering browser");
        self.browsers.insert(name, path);
    }

    /// Populate the registry from the browsers detected on this host.
    pub fn register_installed(&mut self) {
        for (name, path) in discovery::installed_browsers() {
            self.register(name, path);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.browsers.get(name).map(PathBuf::as_path)
    }

    /// Resolve a registered name into a launchable entry.
    pub fn resolve(&self, name: &str) -> Result<BrowserEntry> {
        match self.browsers.get(name) {
            Some(path) => Ok(BrowserEntry {
                name: name.to_string(),
                path: path.clone(),
            }),
            None => Err(BstartError::UnknownBrowser {
                name: name.to_string(),
            }),
        }
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.browsers
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}
