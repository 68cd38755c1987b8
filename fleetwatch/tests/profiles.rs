//! Tests for endpoint profile load/save through the binary
//! (non-interactive paths only; --dry-run exits before the TUI starts).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_with_config(config_home: &Path, args: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_fleetwatch");
    let output = Command::new(exe)
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .expect("run fleetwatch");
    let ok = output.status.success();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (ok, text)
}

fn profiles_path(config_home: &Path) -> PathBuf {
    config_home.join("fleetwatch").join("profiles.json")
}

#[test]
fn test_profile_created_on_first_use() {
    let td = tempfile::tempdir().unwrap();
    // Provide profile + url => should create profiles.json
    let (_ok, _out) = run_with_config(
        td.path(),
        &["--profile", "unittest", "http://one.example/api/v1", "--dry-run"],
    );
    let data = fs::read_to_string(profiles_path(td.path())).expect("profiles.json created");
    assert!(
        data.contains("unittest") && data.contains("http://one.example/api/v1"),
        "profiles.json missing profile entry: {data}"
    );
}

#[test]
fn test_profile_overwrite_only_when_changed() {
    let td = tempfile::tempdir().unwrap();
    // Initial create
    let (_ok, _out) = run_with_config(
        td.path(),
        &["--profile", "prod", "http://one.example/api/v1", "--dry-run"],
    );
    let first = fs::read_to_string(profiles_path(td.path())).unwrap();
    // Re-run identical (should not duplicate or corrupt)
    let (_ok2, _out2) = run_with_config(
        td.path(),
        &["--profile", "prod", "http://one.example/api/v1", "--dry-run"],
    );
    let second = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert_eq!(first, second, "Profile file changed despite identical input");
    // Overwrite with different URL using --save (no prompt path)
    let (_ok3, _out3) = run_with_config(
        td.path(),
        &[
            "--profile",
            "prod",
            "--save",
            "http://two.example/api/v1",
            "--dry-run",
        ],
    );
    let third = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(
        third.contains("two.example"),
        "Updated URL not written: {third}"
    );
}

#[test]
fn test_saved_profile_resolves_endpoint() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, _out) = run_with_config(
        td.path(),
        &["--profile", "lab", "http://lab.example/api/v1", "--dry-run"],
    );
    // Name-only run loads the stored URL
    let (ok, text) = run_with_config(td.path(), &["--profile", "lab", "--dry-run"]);
    assert!(ok);
    assert!(
        text.contains("http://lab.example/api/v1"),
        "stored profile not resolved: {text}"
    );
}
