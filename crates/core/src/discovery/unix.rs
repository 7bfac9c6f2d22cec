//! PATH-probing detection for Linux and the BSDs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

/// Well-known browser binary names probed on `PATH`.
const COMMON_BROWSERS: &[&str] = &[
    "firefox",
    "google-chrome",
    "chromium-browser",
    "opera",
    "brave-browser",
    "vivaldi",
];

pub(super) fn installed_browsers() -> BTreeMap<String, PathBuf> {
    probe_browsers(COMMON_BROWSERS, |name| which::which(name))
}

/// Probe each candidate name, keeping exactly the resolvable ones.
fn probe_browsers<F>(names: &[&str], probe: F) -> BTreeMap<String, PathBuf>
where
    F: Fn(&str) -> Result<PathBuf, which::Error>,
{
    let mut browsers = BTreeMap::new();

    for name in names {
        match probe(name) {
            Ok(path) => {
                debug!(target = "bstart", browser = name, path = %path.display(), "found on PATH");
                browsers.insert((*name).to_string(), path);
            }
            Err(err) => {
                debug!(target = "bstart", browser = name, error = %err, "not on PATH");
            }
        }
    }

    browsers
}

/// There is no portable way to resolve the desktop default browser here, so
/// the `xdg-open` dispatcher stands in for it when present.
pub(super) fn default_browser() -> Option<PathBuf> {
    match which::which("xdg-open") {
        Ok(path) => Some(path),
        Err(err) => {
            debug!(target = "bstart", error = %err, "xdg-open not on PATH");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use super::*;

    fn install_browser(dir: &Path, name: &str) {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    fn probe_keeps_exactly_the_resolvable_names() {
        let temp = tempfile::tempdir().unwrap();
        install_browser(temp.path(), "firefox");
        install_browser(temp.path(), "vivaldi");
        // Present but not executable; must be omitted.
        fs::write(temp.path().join("opera"), "#!/bin/sh\n").unwrap();

        let cwd = std::env::current_dir().unwrap();
        let browsers = probe_browsers(COMMON_BROWSERS, |name| {
            which::which_in(name, Some(temp.path()), &cwd)
        });

        let names: Vec<&str> = browsers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["firefox", "vivaldi"]);
        assert_eq!(browsers["firefox"], temp.path().join("firefox"));
    }

    #[test]
    fn probe_with_no_browsers_on_path_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();

        let browsers = probe_browsers(COMMON_BROWSERS, |name| {
            which::which_in(name, Some(temp.path()), &cwd)
        });

        assert!(browsers.is_empty());
    }
}
