//! CLI integration tests for the gist command-line interface.
//!
//! Server-backed commands are pointed at a closed port; local
//! summarization runs fully in process.

use assert_cmd::Command;
use predicates::prelude::*;

/// Nothing listens here.
const DEAD_SERVER: &str = "http://127.0.0.1:9";

/// Get a command for the gist binary, isolated from user config.
fn gist() -> Command {
    let mut cmd = Command::cargo_bin("gist").unwrap();
    cmd.env_remove("GIST_SERVER_URL")
        .env("GIST_CONFIG_DIR", std::env::temp_dir().join("gist-cli-tests-no-config"));
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    gist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gist"))
        .stdout(predicate::str::contains("summarize"));
}

#[test]
fn test_version_displays() {
    gist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gist"));
}

#[test]
fn test_help_lists_subcommands() {
    gist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("texts"))
        .stdout(predicate::str::contains("summarize"));
}

#[test]
fn test_start_help_lists_overrides() {
    gist()
        .args(["start", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--no-samples"));
}

#[test]
fn test_texts_help_lists_actions() {
    gist()
        .args(["texts", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("delete"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Flag Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_verbose_flag_accepted() {
    gist().args(["--verbose", "--help"]).assert().success();
}

#[test]
fn test_json_flag_accepted() {
    gist().args(["--json", "--help"]).assert().success();
}

#[test]
fn test_server_flag_accepted() {
    gist()
        .args(["--server", "http://example.com:9000", "--help"])
        .assert()
        .success();
}

#[test]
fn test_unknown_subcommand_fails() {
    gist()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_status_reports_not_running() {
    gist()
        .args(["--server", DEAD_SERVER, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not running"));
}

#[test]
fn test_status_json_not_running() {
    gist()
        .args(["--server", DEAD_SERVER, "--json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"running\": false"));
}

#[test]
fn test_texts_list_without_server_fails() {
    gist()
        .args(["--server", DEAD_SERVER, "texts", "list"])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Summarize
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_summarize_requires_source() {
    gist()
        .arg("summarize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_summarize_rejects_two_sources() {
    gist()
        .args(["summarize", "1", "--text", "Some text."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_summarize_rejects_zero_sentences() {
    gist()
        .args(["summarize", "--local", "--text", "One. Two.", "-n", "0"])
        .assert()
        .failure();
}

#[test]
fn test_summarize_local_text() {
    gist()
        .args([
            "summarize",
            "--local",
            "-n",
            "1",
            "--text",
            "It rained. The United Nations met the World Bank in Geneva on Monday.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("United Nations"))
        .stdout(predicate::str::contains("It rained").not());
}

#[test]
fn test_summarize_local_json() {
    gist()
        .args(["--json", "summarize", "--local", "--text", "Only one sentence here."])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"Only one sentence here.\""));
}

#[test]
fn test_summarize_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(
        &path,
        "Short one. Drones from Amazon and Google deliver parcels across London and Paris.",
    )
    .unwrap();

    gist()
        .args(["summarize", "--local", "-n", "1", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Amazon"));
}

#[test]
fn test_summarize_local_missing_file_fails() {
    gist()
        .args(["summarize", "--local", "--file", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_summarize_local_needs_inline_source() {
    gist()
        .args(["summarize", "--local", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--local needs"));
}
