#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly and responds to the
//! non-interactive commands without crashing.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn recordwise() -> Command {
    Command::cargo_bin("recordwise").unwrap()
}

#[test]
fn test_help_displays_usage() {
    recordwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("student record supplement form"))
        .stdout(predicate::str::contains("--env-file"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("competencies"));
}

#[test]
fn test_version_displays_version() {
    recordwise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_competencies_lists_all_labels() {
    let mut assert = recordwise()
        .args(["--no-color", "competencies"])
        .assert()
        .success();

    for label in recordwise::completion::COMPETENCIES {
        assert = assert.stdout(predicate::str::contains(*label));
    }
}

#[test]
fn test_invalid_log_level_is_usage_error() {
    recordwise()
        .args(["--log-level", "recordwise=notalevel", "competencies"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Invalid log level"));
}

#[test]
fn test_unknown_subcommand_fails() {
    recordwise()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}
