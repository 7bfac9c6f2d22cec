//! Launch orchestration.
//!
//! Every selected browser is started on the start page, given a moment to
//! initialize, then fed the requested URLs. Browsers run concurrently with
//! each other; within a browser the URL strategy is either fast (all at once,
//! no ordering guarantee) or ordered (one at a time, input order preserved).
//!
//! Process spawning sits behind the [`UrlOpener`] seam so the scheduling
//! logic can be exercised without touching real executables.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::{BstartError, Result};
use crate::start_page::StartPage;

/// URL dispatch strategy for a single browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Open all URLs concurrently; no ordering guarantee.
    Fast,
    /// Open URLs one at a time, preserving input order.
    #[default]
    Ordered,
}

/// A named browser executable selected for launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
}

/// One unit of launch work: which browsers, which URLs, which strategy.
#[derive(Clone, Debug)]
pub struct LaunchRequest {
    pub browsers: Vec<BrowserEntry>,
    pub urls: Vec<String>,
    pub mode: LaunchMode,
}

/// Spawns browser windows and URL opens.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Start the browser on a new window, optionally pointed at a start page.
    async fn launch_window(&self, browser: &BrowserEntry, start_uri: Option<&str>) -> Result<()>;

    /// Open one URL in an already-running browser.
    async fn open(&self, browser: &BrowserEntry, url: &str) -> Result<()>;
}

/// Production opener: spawns the browser executable directly and leaves the
/// process running detached.
pub struct ProcessOpener;

/// Arguments for the initial window spawn. `xdg-open` (the Unix
/// default-browser stand-in) is a one-shot URL dispatcher that takes a single
/// argument and rejects window flags, so it gets the start page URI alone.
fn window_args(path: &Path, start_uri: Option<&str>) -> Vec<OsString> {
    let dispatcher = path.file_stem().is_some_and(|stem| stem == "xdg-open");

    let mut args = Vec::new();
    if !dispatcher {
        args.push(OsString::from("--new-window"));
    }
    if let Some(uri) = start_uri {
        args.push(OsString::from(uri));
    }
    args
}

#[async_trait]
impl UrlOpener for ProcessOpener {
    async fn launch_window(&self, browser: &BrowserEntry, start_uri: Option<&str>) -> Result<()> {
        let args = window_args(&browser.path, start_uri);
        if args.is_empty() {
            debug!(target = "bstart", browser = %browser.name, "url dispatcher with no start page; nothing to spawn");
            return Ok(());
        }

        let child = Command::new(&browser.path)
            .args(&args)
            .spawn()
            .map_err(|source| BstartError::Spawn {
                path: browser.path.clone(),
                source,
            })?;
        info!(target = "bstart", browser = %browser.name, pid = child.id(), "browser started");
        Ok(())
    }

    async fn open(&self, browser: &BrowserEntry, url: &str) -> Result<()> {
        let child = Command::new(&browser.path)
            .arg(url)
            .spawn()
            .map_err(|source| BstartError::Spawn {
                path: browser.path.clone(),
                source,
            })?;
        info!(target = "bstart", browser = %browser.name, url, pid = child.id(), "opening url");
        Ok(())
    }
}

/// Drives [`LaunchRequest`]s through an opener with tunable delays.
pub struct Launcher<O: UrlOpener = ProcessOpener> {
    opener: O,
    init_delay: Duration,
    open_delay: Duration,
}

impl Launcher<ProcessOpener> {
    pub fn new() -> Self {
        Self::with_opener(ProcessOpener)
    }
}

impl Default for Launcher<ProcessOpener> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: UrlOpener> Launcher<O> {
    pub fn with_opener(opener: O) -> Self {
        Self {
            opener,
            init_delay: Duration::from_secs(3),
            open_delay: Duration::from_millis(500),
        }
    }

    /// Pause after starting a browser, before any URL is opened.
    pub fn init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = delay;
        self
    }

    /// Pause after each URL open.
    pub fn open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = delay;
        self
    }

    /// Run one launch request to completion. Browsers are driven concurrently;
    /// a failure in one browser is logged and does not abort its siblings.
    pub async fn launch(&self, request: &LaunchRequest, start_page: Option<&StartPage>) {
        let started = Instant::now();
        info!(
            target = "bstart",
            browsers = request.browsers.len(),
            urls = request.urls.len(),
            mode = ?request.mode,
            "launching"
        );

        let runs = request
            .browsers
            .iter()
            .map(|browser| self.launch_one(browser, request, start_page));
        for (browser, outcome) in request.browsers.iter().zip(join_all(runs).await) {
            if let Err(err) = outcome {
                warn!(target = "bstart", browser = %browser.name, error = %err, "browser launch failed");
            }
        }

        info!(
            target = "bstart",
            elapsed_ms = started.elapsed().as_millis() as u64,
            "launch complete"
        );
    }

    async fn launch_one(
        &self,
        browser: &BrowserEntry,
        request: &LaunchRequest,
        start_page: Option<&StartPage>,
    ) -> Result<()> {
        self.opener
            .launch_window(browser, start_page.map(StartPage::uri))
            .await?;

        // Let the browser come up before handing it URLs.
        sleep(self.init_delay).await;

        match request.mode {
            LaunchMode::Fast => {
                let opens = request.urls.iter().map(|url| self.open_one(browser, url));
                join_all(opens).await;
            }
            LaunchMode::Ordered => {
                for url in &request.urls {
                    self.open_one(browser, url).await;
                }
            }
        }
        Ok(())
    }

    /// A failed open is logged and skipped; remaining URLs still go out.
    async fn open_one(&self, browser: &BrowserEntry, url: &str) {
        if let Err(err) = self.opener.open(browser, url).await {
            warn!(target = "bstart", browser = %browser.name, url, error = %err, "failed to open url");
        }
        sleep(self.open_delay).await;
    }
}
