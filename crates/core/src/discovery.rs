//! Installed-browser detection.
//!
//! Each platform exposes the same two operations through a `cfg`-selected
//! backend module:
//!
//! - [`installed_browsers`]: enumerate browsers installed on the host. On
//!   Windows this walks the `StartMenuInternet` client keys in both registry
//!   hives; on Linux it probes a fixed list of well-known binary names on
//!   `PATH`. macOS has no backend and legitimately reports no browsers.
//! - [`default_browser`]: resolve the user's default browser, when the OS
//!   exposes one.
//!
//! Every failure mode (missing registry keys, absent binaries) is logged and
//! omits the entry; detection is never fatal.

use std::collections::BTreeMap;
use std::path::PathBuf;

#[cfg(all(unix, not(target_os = "macos")))]
mod unix;
#[cfg(windows)]
mod windows;

/// Browsers installed on this host, keyed by name, sorted by name.
///
/// Only entries whose executable could actually be resolved are included.
pub fn installed_browsers() -> BTreeMap<String, PathBuf> {
    #[cfg(windows)]
    return windows::installed_browsers();

    #[cfg(all(unix, not(target_os = "macos")))]
    return unix::installed_browsers();

    #[cfg(target_os = "macos")]
    {
        tracing::warn!(target = "bstart", "browser detection is not available on macOS");
        return BTreeMap::new();
    }

    #[allow(unreachable_code)]
    {
        tracing::warn!(target = "bstart", "unsupported operating system");
        BTreeMap::new()
    }
}

/// The user's default browser executable, if the OS exposes one.
pub fn default_browser() -> Option<PathBuf> {
    #[cfg(windows)]
    return windows::default_browser();

    #[cfg(all(unix, not(target_os = "macos")))]
    return unix::default_browser();

    #[allow(unreachable_code)]
    None
}
