//! Integration tests for the casefix CLI surface.
//!
//! Argument parsing, help text and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn casefix() -> Command {
    Command::cargo_bin("casefix").expect("Failed to find casefix binary")
}

#[test]
fn test_cli_version_flag() {
    casefix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("casefix"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    casefix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Correct the letter case of src/href references",
        ))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--extension"));
}

#[test]
fn test_cli_invalid_flag() {
    casefix()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_cli_invalid_format() {
    casefix()
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_verbose_conflicts_with_quiet() {
    casefix()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
