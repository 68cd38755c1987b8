//! CLI arg parsing tests for the fleetwatch binary.
use std::process::Command;

fn run_fleetwatch(args: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_fleetwatch");
    let output = Command::new(exe)
        .args(args)
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

#[test]
fn test_help_mentions_flags_and_fallback() {
    let (ok, text) = run_fleetwatch(&["--help"]);
    assert!(ok, "fleetwatch --help did not succeed");
    assert!(
        text.contains("--profile") && text.contains("-P") && text.contains("--dry-run"),
        "help text missing expected flags (--profile/-P, --dry-run)\n{text}"
    );
    assert!(
        text.contains("FLEETWATCH_API_URL") && text.contains("http://localhost:8000/api/v1"),
        "help text missing endpoint fallback documentation\n{text}"
    );
}

#[test]
fn test_dry_run_reports_resolved_endpoint() {
    let td = tempfile::tempdir().unwrap();
    let exe = env!("CARGO_BIN_EXE_fleetwatch");
    let output = Command::new(exe)
        .args(["--dry-run", "http://api.example:8000/api/v1"])
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("run fleetwatch");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(
        text.contains("http://api.example:8000/api/v1"),
        "dry-run did not echo the endpoint: {text}"
    );
}

#[test]
fn test_dry_run_uses_env_endpoint_when_no_args() {
    let td = tempfile::tempdir().unwrap();
    let exe = env!("CARGO_BIN_EXE_fleetwatch");
    let output = Command::new(exe)
        .args(["--dry-run"])
        .env("XDG_CONFIG_HOME", td.path())
        .env("FLEETWATCH_API_URL", "http://staging.example/api/v1")
        .output()
        .expect("run fleetwatch");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(
        text.contains("http://staging.example/api/v1"),
        "dry-run ignored FLEETWATCH_API_URL: {text}"
    );
}

#[test]
fn test_rejects_extra_positional_argument() {
    let (_ok, text) = run_fleetwatch(&["http://one.example/api", "http://two.example/api"]);
    assert!(
        text.contains("Unexpected argument"),
        "extra positional not rejected: {text}"
    );
}

#[test]
fn test_invalid_url_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    let exe = env!("CARGO_BIN_EXE_fleetwatch");
    let output = Command::new(exe)
        .args(["--dry-run", "not a url"])
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("run fleetwatch");
    assert!(!output.status.success(), "invalid URL accepted");
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("invalid API base URL"), "missing error: {text}");
}
