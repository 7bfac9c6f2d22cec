//! Registry-based detection for Windows.
//!
//! Browser clients register under `SOFTWARE\Clients\StartMenuInternet`
//! (native and WOW6432Node hives). Each client's executable is resolved via
//! its `shell\open\command` default value. The user's default browser is
//! resolved through the https `UserChoice` ProgID.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, warn};
use winreg::RegKey;
use winreg::enums::{HKEY_CLASSES_ROOT, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

const CLIENT_KEYS: &[&str] = &[
    r"SOFTWARE\Clients\StartMenuInternet",
    r"SOFTWARE\WOW6432Node\Clients\StartMenuInternet",
];

const USER_CHOICE_KEY: &str =
    r"Software\Microsoft\Windows\Shell\Associations\UrlAssociations\https\UserChoice";

pub(super) fn installed_browsers() -> BTreeMap<String, PathBuf> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let mut browsers = BTreeMap::new();

    for key_path in CLIENT_KEYS {
        let clients = match hklm.open_subkey(key_path) {
            Ok(key) => key,
            Err(err) => {
                warn!(target = "bstart", key = key_path, error = %err, "registry key unavailable");
                continue;
            }
        };

        for name in clients.enum_keys().flatten() {
            match browser_path(key_path, &name) {
                Some(path) => {
                    debug!(target = "bstart", browser = %name, path = %path.display(), "found client");
                    browsers.insert(name, path);
                }
                None => {
                    debug!(target = "bstart", browser = %name, "client has no open command");
                }
            }
        }
    }

    browsers
}

/// Resolve one client's executable via its `shell\open\command` subkey.
fn browser_path(client_key: &str, name: &str) -> Option<PathBuf> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key_path = format!(r"{client_key}\{name}\shell\open\command");
    let command: String = hklm.open_subkey(&key_path).ok()?.get_value("").ok()?;

    // Commands here are a bare (possibly quoted) executable path.
    let path = command.replace('"', "");
    if path.is_empty() {
        return None;
    }
    Some(PathBuf::from(path))
}

pub(super) fn default_browser() -> Option<PathBuf> {
    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let progid: String = match hkcu
        .open_subkey(USER_CHOICE_KEY)
        .and_then(|key| key.get_value("ProgID"))
    {
        Ok(progid) => progid,
        Err(err) => {
            warn!(target = "bstart", error = %err, "https UserChoice unavailable");
            return None;
        }
    };
    debug!(target = "bstart", progid = %progid, "default browser ProgID");

    let hkcr = RegKey::predef(HKEY_CLASSES_ROOT);
    let command: String = match hkcr
        .open_subkey(format!(r"{progid}\shell\open\command"))
        .and_then(|key| key.get_value(""))
    {
        Ok(command) => command,
        Err(err) => {
            warn!(target = "bstart", progid = %progid, error = %err, "no open command for ProgID");
            return None;
        }
    };

    parse_exe(&command)
}

/// Extract the executable from a ProgID open command, which carries arguments
/// (`"C:\...\chrome.exe" -- "%1"` or an unquoted path).
fn parse_exe(command: &str) -> Option<PathBuf> {
    let trimmed = command.trim();

    if let Some(rest) = trimmed.strip_prefix('"') {
        return rest.split('"').next().map(PathBuf::from);
    }

    let lower = trimmed.to_ascii_lowercase();
    let end = lower.find(".exe")? + ".exe".len();
    Some(PathBuf::from(&trimmed[..end]))
}
