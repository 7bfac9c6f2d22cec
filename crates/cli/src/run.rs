//! Top-level dispatch: browser selection, parameter-file fan-out, launch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use bstart::{
    BrowserEntry, BrowserRegistry, BstartError, LaunchRequest, Launcher, StartPage, discovery,
};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::listing;
use crate::params;
use crate::settings::{self, Settings};

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load();

    let mut registry = BrowserRegistry::new();
    registry.register_installed();
    info!(target = "bstart", detected = registry.len(), "browser detection done");

    if cli.browser_list {
        print!("{}", listing::render(&registry));
        return Ok(());
    }

    if let Some(parameter_file) = &cli.parameter_file {
        let path = match parameter_file {
            Some(path) => path.clone(),
            None => match settings::default_parameter_file() {
                Some(path) => path,
                None => {
                    warn!(target = "bstart", "home directory unavailable; no default parameter file");
                    return Ok(());
                }
            },
        };

        if !path.exists() {
            warn!(target = "bstart", path = %path.display(), "parameter file not found");
            return Ok(());
        }
        if !cli.browser_name.is_empty() || !cli.browser_path.is_empty() || !cli.urls.is_empty() {
            eprintln!("Warning: parameter file specified. Ignoring other options.");
        }

        return run_profiles(&path, registry, settings).await;
    }

    let Some(urls) = select_urls(&cli.urls, &cli.url_args) else {
        eprintln!(
            "Warning: do not mix --urls with bare URL arguments. \
             Use one style or the other."
        );
        return Ok(());
    };

    let browsers = select_browsers(&mut registry, &cli.browser_name, &cli.browser_path);
    let request = LaunchRequest {
        browsers,
        urls,
        mode: cli.mode(),
    };
    launch(request, &settings).await;
    Ok(())
}

/// Merge the two URL styles; mixing them is rejected (`None`) because the
/// combined dispatch order would no longer match what the user typed.
fn select_urls(flag_urls: &[String], positional_urls: &[String]) -> Option<Vec<String>> {
    match (flag_urls.is_empty(), positional_urls.is_empty()) {
        (false, false) => None,
        (false, true) => Some(flag_urls.to_vec()),
        (true, _) => Some(positional_urls.to_vec()),
    }
}

/// Turn name/path options into launch entries, falling back to the OS default
/// browser when neither was given. Unknown names are logged and skipped.
fn select_browsers(
    registry: &mut BrowserRegistry,
    names: &[String],
    paths: &[PathBuf],
) -> Vec<BrowserEntry> {
    let mut browsers = Vec::new();

    if names.is_empty() && paths.is_empty() {
        match discovery::default_browser() {
            Some(path) => {
                let name = path.display().to_string();
                registry.register(&name, &path);
                browsers.push(BrowserEntry { name, path });
            }
            None => {
                warn!(target = "bstart", "no default browser found");
            }
        }
        return browsers;
    }

    for path in paths {
        let name = path.display().to_string();
        registry.register(&name, path);
        browsers.push(BrowserEntry {
            name,
            path: path.clone(),
        });
    }

    for name in names {
        match registry.resolve(name) {
            Ok(entry) => browsers.push(entry),
            Err(BstartError::UnknownBrowser { name }) => {
                warn!(target = "bstart", browser = %name, "not a detected browser; skipping");
            }
            Err(err) => {
                warn!(target = "bstart", browser = %name, error = %err, "browser lookup failed");
            }
        }
    }

    browsers
}

/// Run every profile in the parameter file as an independent concurrent
/// launch, joined before returning.
async fn run_profiles(path: &Path, mut registry: BrowserRegistry, settings: Settings) -> Result<()> {
    info!(target = "bstart", path = %path.display(), "running with parameter file");

    let profiles = params::load_parameter_file(path);
    if profiles.is_empty() {
        warn!(target = "bstart", path = %path.display(), "no launch profiles loaded");
        return Ok(());
    }

    let mut requests = Vec::new();
    for (name, profile) in profiles {
        let browsers =
            select_browsers(&mut registry, &profile.browser_names, &profile.browser_paths);
        info!(
            target = "bstart",
            profile = %name,
            browsers = browsers.len(),
            urls = profile.urls.len(),
            "profile loaded"
        );
        requests.push(LaunchRequest {
            browsers,
            urls: profile.urls,
            mode: profile.mode,
        });
    }

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let settings = settings.clone();
            tokio::spawn(async move { launch(request, &settings).await })
        })
        .collect();
    for handle in handles {
        if let Err(err) = handle.await {
            warn!(target = "bstart", error = %err, "profile task failed");
        }
    }
    Ok(())
}

async fn launch(request: LaunchRequest, settings: &Settings) {
    if request.browsers.is_empty() {
        warn!(target = "bstart", "no browsers selected; nothing to launch");
        return;
    }

    let start_page = match StartPage::create(settings.countdown_seconds) {
        Ok(page) => Some(page),
        Err(err) => {
            warn!(target = "bstart", error = %err, "continuing without start page");
            None
        }
    };

    let launcher = Launcher::new()
        .init_delay(Duration::from_millis(settings.init_delay_ms))
        .open_delay(Duration::from_millis(settings.open_delay_ms));
    launcher.launch(&request, start_page.as_ref()).await;
    // start_page drops here; the temp file is removed before exit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mixing_url_styles_is_rejected() {
        assert!(select_urls(&strings(&["http://a"]), &strings(&["http://b"])).is_none());
    }

    #[test]
    fn single_url_style_passes_through_in_order() {
        assert_eq!(
            select_urls(&strings(&["http://a", "http://b"]), &[]),
            Some(strings(&["http://a", "http://b"]))
        );
        assert_eq!(
            select_urls(&[], &strings(&["http://c"])),
            Some(strings(&["http://c"]))
        );
    }

    #[test]
    fn no_urls_is_a_valid_empty_selection() {
        // Start page only, per the CLI help.
        assert_eq!(select_urls(&[], &[]), Some(Vec::new()));
    }

    #[test]
    fn explicit_paths_register_under_themselves() {
        let mut registry = BrowserRegistry::new();
        let paths = vec![PathBuf::from("/opt/firefox/firefox")];

        let browsers = select_browsers(&mut registry, &[], &paths);

        assert_eq!(browsers.len(), 1);
        assert_eq!(browsers[0].name, "/opt/firefox/firefox");
        assert_eq!(
            registry.get("/opt/firefox/firefox"),
            Some(Path::new("/opt/firefox/firefox"))
        );
    }

    #[test]
    fn unknown_names_are_skipped() {
        let mut registry = BrowserRegistry::new();
        registry.register("firefox", "/usr/bin/firefox");

        let names = strings(&["firefox", "netscape"]);
        let browsers = select_browsers(&mut registry, &names, &[]);

        assert_eq!(browsers.len(), 1);
        assert_eq!(browsers[0].name, "firefox");
    }

    #[test]
    fn names_and_paths_combine_with_paths_first() {
        let mut registry = BrowserRegistry::new();
        registry.register("opera", "/usr/bin/opera");

        let names = strings(&["opera"]);
        let paths = vec![PathBuf::from("/usr/bin/vivaldi")];
        let browsers = select_browsers(&mut registry, &names, &paths);

        let selected: Vec<&str> = browsers.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(selected, vec!["/usr/bin/vivaldi", "opera"]);
    }
}
