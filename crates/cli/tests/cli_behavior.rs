//! End-to-end behavior of the `bstart` binary for the paths that never spawn
//! a browser: help, listing, option conflicts, and missing parameter files.

use std::path::PathBuf;
use std::process::Command;

/// Path to the built `bstart` binary next to the test executable.
fn bstart_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // test binary name
    path.pop(); // deps
    path.push("bstart");
    path
}

/// Run bstart with HOME pointed at a scratch dir so logs and settings stay
/// out of the real user directory.
fn run_bstart(home: &tempfile::TempDir, args: &[&str]) -> (bool, String, String) {
    let output = Command::new(bstart_binary())
        .args(args)
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute bstart");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn bare_invocation_prints_help() {
    let home = tempfile::tempdir().unwrap();
    let (success, stdout, _) = run_bstart(&home, &[]);

    assert!(success);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--browser-name"));
}

#[test]
fn mixed_url_styles_warn_and_do_not_launch() {
    let home = tempfile::tempdir().unwrap();
    let (success, _, stderr) = run_bstart(
        &home,
        &["-n", "no-such-browser", "-u", "http://a", "http://b"],
    );

    // Conflicting options warn on stderr without a distinct failure code.
    assert!(success);
    assert!(stderr.contains("Warning: do not mix --urls"));
}

#[test]
fn browser_list_renders_table_or_placeholder() {
    let home = tempfile::tempdir().unwrap();
    let (success, stdout, _) = run_bstart(&home, &["--browser-list"]);

    assert!(success);
    assert!(stdout.contains("Browser list") || stdout.contains("No browsers registered."));
}

#[test]
fn missing_parameter_file_is_a_warning_not_a_failure() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.yaml");
    let (success, _, stderr) = run_bstart(&home, &["-P", missing.to_str().unwrap()]);

    assert!(success);
    assert!(stderr.contains("parameter file not found"));
}

#[test]
fn empty_parameter_file_runs_no_profiles() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("params.yaml");
    std::fs::write(&path, "{}\n").unwrap();

    let (success, _, stderr) = run_bstart(&home, &["-P", path.to_str().unwrap()]);

    assert!(success);
    assert!(stderr.contains("no launch profiles loaded"));
}

#[test]
fn fast_and_ordered_flags_conflict() {
    let home = tempfile::tempdir().unwrap();
    let (success, _, stderr) = run_bstart(&home, &["--fast", "--ordered", "http://a"]);

    assert!(!success);
    assert!(stderr.contains("cannot be used with"));
}
