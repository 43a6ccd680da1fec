//! End-to-end tests for the `run` command.

mod common;
use common::prelude::*;

/// The wrapped command sees the stamped file; the template comes back after
#[cfg(unix)]
#[test]
fn test_run_stamps_and_restores() {
    let fixture = TestFixture::new().with_version_file(files::EXPANDED_KEYWORDS);
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("run")
        .arg("--root")
        .arg(fixture.path())
        .arg("--")
        .arg("sh")
        .arg("-c")
        .arg("cp _version.py seen.py")
        .assert()
        .success();

    fixture
        .child("seen.py")
        .assert(predicate::str::contains("version_version = '2.0'"));
    fixture
        .child("_version.py")
        .assert(files::EXPANDED_KEYWORDS);
}

/// The wrapped command's exit code is propagated and the file still restored
#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let fixture = TestFixture::new().with_version_file(files::UNEXPANDED_KEYWORDS);
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("run")
        .arg("--root")
        .arg(fixture.path())
        .arg("--")
        .arg("sh")
        .arg("-c")
        .arg("exit 7")
        .assert()
        .code(7);

    fixture
        .child("_version.py")
        .assert(files::UNEXPANDED_KEYWORDS);
}

/// SIGINT to revstamp and a killed command still restore the file
#[cfg(unix)]
#[test]
fn test_run_restores_after_interrupt() {
    let fixture = TestFixture::new().with_version_file(files::UNEXPANDED_KEYWORDS);
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("run")
        .arg("--root")
        .arg(fixture.path())
        .arg("--")
        .arg("sh")
        .arg("-c")
        .arg("cp _version.py seen.py; kill -INT $PPID; kill -KILL $$")
        .assert()
        .code(137);

    fixture
        .child("seen.py")
        .assert(predicate::str::contains("version_version = "));
    fixture
        .child("_version.py")
        .assert(files::UNEXPANDED_KEYWORDS);
}

/// A command that cannot be started is an error
#[test]
fn test_run_missing_command() {
    let fixture = TestFixture::new();
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("run")
        .arg("--root")
        .arg(fixture.path())
        .arg("--")
        .arg("revstamp-no-such-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command failed"));

    fixture.child("_version.py").assert(predicate::path::missing());
}

/// A command is required
#[test]
fn test_run_requires_command() {
    let mut cmd = cargo_bin_cmd!("revstamp");

    cmd.arg("run").assert().code(2);
}
