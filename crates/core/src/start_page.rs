//! Temporary countdown start page.
//!
//! Each launch shows a local HTML page first so the browser has a concrete
//! document to open its new window on. The page counts down and closes its
//! own tab; the file itself is removed when the [`StartPage`] guard drops.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use url::Url;

use crate::error::{BstartError, Result};

/// Seconds before the start page closes its own tab.
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 6;

/// A temporary start page on disk. Removing the file is tied to this guard's
/// lifetime, so keep it alive until every browser has been launched.
#[derive(Debug)]
pub struct StartPage {
    path: PathBuf,
    uri: Url,
}

impl StartPage {
    /// Write the countdown page to a fresh temp file and return its guard.
    pub fn create(countdown_seconds: u32) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("bstart-")
            .suffix(".html")
            .tempfile()
            .map_err(BstartError::StartPage)?;
        file.write_all(render(countdown_seconds).as_bytes())
            .map_err(BstartError::StartPage)?;

        // Detach from tempfile's own delete-on-drop; this guard owns cleanup
        // so the file survives exactly as long as the launch does.
        let (_, path) = file
            .keep()
            .map_err(|err| BstartError::StartPage(err.error))?;

        let uri = Url::from_file_path(&path).map_err(|()| {
            BstartError::StartPage(std::io::Error::other("temp path is not absolute"))
        })?;

        debug!(target = "bstart", path = %path.display(), "created start page");
        Ok(Self { path, uri })
    }

    /// `file://` URI of the page.
    pub fn uri(&self) -> &str {
        self.uri.as_str()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StartPage {
    fn drop(&mut self) {
        // Best effort; the OS temp cleaner gets anything we miss.
        if let Err(err) = std::fs::remove_file(&self.path) {
            warn!(target = "bstart", path = %self.path.display(), error = %err, "failed to remove start page");
        }
    }
}

fn render(countdown_seconds: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <title>bstart start page</title>
</head>
<body>
    <h1>bstart start page</h1>
    <p>仕様上の都合のため、このファイルが表示されます</p>
    <p id="JMessage"></p>
    <p>This file is displayed due to specification convenience</p>
    <p id="EMessage"></p>
    <script>
        var sec = {countdown_seconds};
        function count_down() {{
            sec--;
            var jmsg = sec + "秒後、このタブを閉じます";
            document.getElementById("JMessage").innerText = jmsg;
            var emsg = sec + " seconds later, close this tab";
            document.getElementById("EMessage").innerText = emsg;
            if (sec == 0) {{
                window.close();
            }}
        }}
        count_down();
        setInterval(count_down, 1000);
    </script>
</body>
</html>
"#
    )
}
