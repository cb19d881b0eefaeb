//! CLI interface tests
//!
//! Runs the binary the way a workflow step does: inputs through `INPUT_*`
//! variables or flags, run context through `GITHUB_*` variables.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;
use common::{fixtures, ACTIONS_VARS};

/// Helper to get the bundle-size-report binary with a clean Actions environment
fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-size-report"));
    for var in ACTIONS_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle size reporter"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-size-report"));
}

#[test]
fn test_report_help_lists_inputs() {
    get_bin()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--diff-path"))
        .stdout(predicate::str::contains("INPUT_FILE_GLOB_PATTERN"));
}

#[test]
fn test_dry_run_prints_single_build_table() {
    let (_tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 2_048_000)
        .file("vendor.js", 512_000)
        .build()
        .unwrap();

    get_bin()
        .args(["report", "--dry-run", "--path"])
        .arg(&dist)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<summary>Bundled size for the files is listed below:</summary>",
        ))
        .stdout(predicate::str::contains("| File | File Size |"))
        .stdout(predicate::str::contains("| **app.js** | 1.95 MB |"))
        .stdout(predicate::str::contains("| **vendor.js** | 500.00 KB |"))
        .stdout(predicate::str::contains("| Total | 2.44 MB |"));
}

#[test]
fn test_dry_run_prints_diff_table_from_env_inputs() {
    let (_tmp, current, baseline) = fixtures::current_and_baseline().unwrap();

    get_bin()
        .args(["report", "--dry-run"])
        .env("INPUT_PATH", &current)
        .env("INPUT_DIFF_PATH", &baseline)
        .env("INPUT_FILE_GLOB_PATTERN", "*.js")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| **app.js** | 1.95 MB | 1.46 MB | +500.00 KB 🔼 |",
        ))
        .stdout(predicate::str::contains(
            "| **vendor.js** | 500.00 KB | 500.00 KB | No change |",
        ))
        .stdout(predicate::str::contains("| Total | 2.44 MB | 1.95 MB | +500.00 KB 🔼 |"))
        .stdout(predicate::str::contains("app.js.map").not());
}

#[test]
fn test_empty_inputs_are_treated_as_unset() {
    let (_tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 100)
        .build()
        .unwrap();

    get_bin()
        .args(["report", "--dry-run"])
        .env("INPUT_PATH", &dist)
        .env("INPUT_DIFF_PATH", "")
        .env("INPUT_FILE_GLOB_PATTERN", "")
        .env("INPUT_TOKEN", "")
        .env("INPUT_UPDATE_COMMENT", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("| File | File Size |"))
        .stdout(predicate::str::contains("| **app.js** | 100.00 Bytes |"));
}

#[test]
fn test_unrecognised_update_comment_is_usage_error() {
    let (_tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 1)
        .build()
        .unwrap();

    get_bin()
        .args(["report", "--dry-run"])
        .env("INPUT_PATH", &dist)
        .env("INPUT_UPDATE_COMMENT", "sometimes")
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("update_comment"));
}

#[test]
fn test_json_dry_run_outputs_parseable_json() {
    let (_tmp, current, baseline) = fixtures::current_and_baseline().unwrap();

    let output = get_bin()
        .args(["report", "--dry-run", "--json", "--path"])
        .arg(&current)
        .arg("--diff-path")
        .arg(&baseline)
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Failed to parse stdout as UTF-8");
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should be valid JSON");
    assert_eq!(json["mode"], "diff");
    assert_eq!(json["files"].as_array().unwrap().len(), 3);
    assert_eq!(json["total"]["bytes"], 2_569_000);
}

#[test]
fn test_missing_path_input_is_usage_error() {
    get_bin()
        .args(["report", "--dry-run"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("path"));
}

#[test]
fn test_nonexistent_path_exits_with_noinput() {
    get_bin()
        .args(["report", "--dry-run", "--path", "/nonexistent/bundle-size-report/dist"])
        .assert()
        .failure()
        .code(66)
        .stderr(predicate::str::contains("run the build step"));
}

#[test]
fn test_invalid_glob_exits_with_dataerr() {
    let (_tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 1)
        .build()
        .unwrap();

    get_bin()
        .args(["report", "--dry-run", "--file-glob-pattern", "*.{js"])
        .arg("--path")
        .arg(&dist)
        .assert()
        .failure()
        .code(65);
}

#[test]
fn test_push_run_skips_comment_without_token() {
    let (tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 1)
        .build()
        .unwrap();
    let event = fixtures::push_event(tmp.path()).unwrap();

    get_bin()
        .arg("report")
        .env("INPUT_PATH", &dist)
        .env("GITHUB_EVENT_PATH", &event)
        .env("GITHUB_EVENT_NAME", "push")
        .env("GITHUB_REPOSITORY", "octo/site")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "::notice::Not a pull request run (event: push)",
        ));
}

#[test]
fn test_json_push_run_keeps_stdout_parseable() {
    let (tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 1)
        .build()
        .unwrap();
    let event = fixtures::push_event(tmp.path()).unwrap();

    let output = get_bin()
        .args(["report", "--json"])
        .env("INPUT_PATH", &dist)
        .env("GITHUB_EVENT_PATH", &event)
        .env("GITHUB_EVENT_NAME", "push")
        .env("GITHUB_REPOSITORY", "octo/site")
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Failed to parse stdout as UTF-8");
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should be valid JSON");
    assert_eq!(json["comment"], "skipped");
    let stderr = String::from_utf8(output.stderr).expect("Failed to parse stderr as UTF-8");
    assert!(stderr.contains("::notice::Not a pull request run"));
}

#[test]
fn test_pull_request_run_without_token_fails() {
    let (tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 1)
        .build()
        .unwrap();
    let event = fixtures::pull_request_event(tmp.path(), 7).unwrap();

    get_bin()
        .arg("report")
        .env("INPUT_PATH", &dist)
        .env("GITHUB_EVENT_PATH", &event)
        .env("GITHUB_REPOSITORY", "octo/site")
        .env("GITHUB_ACTIONS", "true")
        .assert()
        .failure()
        .code(64)
        .stdout(predicate::str::contains("::error::"))
        .stderr(predicate::str::contains("secrets.GITHUB_TOKEN"));
}

#[test]
fn test_size_output_is_written_to_github_output() {
    let (tmp, dist) = fixtures::DistBuilder::new("dist")
        .file("app.js", 2_048_000)
        .file("app.js.map", 10)
        .build()
        .unwrap();
    let output_file = tmp.path().join("github_output");

    get_bin()
        .args(["report", "--dry-run", "--file-glob-pattern", "*.js"])
        .env("INPUT_PATH", &dist)
        .env("GITHUB_OUTPUT", &output_file)
        .assert()
        .success();

    let written = fs::read_to_string(&output_file).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("size<<ghadelimiter_"));
    let entries: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    // The output carries the unfiltered scan
    assert_eq!(entries.as_array().unwrap().len(), 2);
}

#[test]
fn test_completions_generate_bash_script() {
    get_bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-size-report"));
}
