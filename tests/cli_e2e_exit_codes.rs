//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: General error (bad configuration, unparseable descriptor)
//! - Exit code 2: Invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

/// Exit code 0 is returned for successful operations.
#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new();
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("version")
        .arg("--root")
        .arg(fixture.path())
        .assert()
        .code(0);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("revstamp"));
}

/// Exit code 1 is returned for an invalid configuration file.
#[test]
fn test_exit_code_invalid_config() {
    let fixture = TestFixture::new().with_config("tag_prefx: v\n");
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("version")
        .arg("--root")
        .arg(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown field"));
}

/// Exit code 2 is returned for an unknown subcommand.
#[test]
fn test_exit_code_invalid_subcommand() {
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("bogus").assert().code(2);
}
