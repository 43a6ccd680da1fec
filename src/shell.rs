//! # Shell Executor
//!
//! Runs an external command and captures its trimmed standard output.
//!
//! Failure here is soft: a missing executable, a start error, a non-zero exit
//! status or a timeout all yield `None`. Callers treat that as "no evidence"
//! and move on, so a broken or absent VCS tool never breaks a build that can
//! still get its version from somewhere else.
//!
//! The executor sits behind the [`CommandRunner`] trait so the VCS source can
//! be exercised without a real `git` binary.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::log;

use crate::diagnostic_level;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Options for a single command invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Log failures at `info` instead of `debug`.
    pub verbose: bool,
    /// Discard the child's standard error instead of inheriting it.
    pub hide_stderr: bool,
    /// Kill the child if it has not exited after this long.
    pub timeout: Option<Duration>,
}

/// Something that can run an external command for the VCS source.
pub trait CommandRunner {
    /// Tries each name in `commands` until one starts, runs it with `args` in
    /// `cwd`, and returns its trimmed stdout on a zero exit status.
    fn run(&self, commands: &[String], args: &[&str], cwd: &Path, options: &RunOptions)
        -> Option<String>;
}

/// [`CommandRunner`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        commands: &[String],
        args: &[&str],
        cwd: &Path,
        options: &RunOptions,
    ) -> Option<String> {
        run_command(commands, args, cwd, options)
    }
}

/// Runs the first startable command out of `commands`.
///
/// A candidate that does not exist is skipped; any other start error stops
/// the search, since trying a different executable name will not fix it.
pub fn run_command(
    commands: &[String],
    args: &[&str],
    cwd: &Path,
    options: &RunOptions,
) -> Option<String> {
    let level = diagnostic_level(options.verbose);
    let name = args.first().copied().unwrap_or_default();

    let mut started = None;
    for command in commands {
        match spawn(command, args, cwd, options.hide_stderr) {
            Ok(child) => {
                started = Some(child);
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                log!(level, "unable to run {} {}: {}", command, name, e);
                return None;
            }
        }
    }
    let Some(mut child) = started else {
        log!(level, "unable to find command, tried {:?}", commands);
        return None;
    };

    let mut stdout = child.stdout.take()?;
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf).map(|_| buf)
    });

    let status = match wait_with_timeout(&mut child, options.timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            // Detached, not joined: a grandchild of the killed process may
            // still hold the pipe open. The reader ends when that one exits.
            drop(reader);
            log!(
                level,
                "{} timed out after {:?}, killed",
                name,
                options.timeout.unwrap_or_default()
            );
            return None;
        }
        Err(e) => {
            drop(reader);
            log!(level, "unable to wait for {}: {}", name, e);
            return None;
        }
    };

    let output = match reader.join() {
        Ok(Ok(buf)) => buf,
        Ok(Err(e)) => {
            log!(level, "unable to read output of {}: {}", name, e);
            return None;
        }
        Err(_) => return None,
    };

    if !status.success() {
        log!(level, "unable to run {} (error, {})", name, status);
        return None;
    }

    Some(String::from_utf8_lossy(&output).trim().to_string())
}

fn spawn(command: &str, args: &[&str], cwd: &Path, hide_stderr: bool) -> io::Result<Child> {
    Command::new(command)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(if hide_stderr {
            Stdio::null()
        } else {
            Stdio::inherit()
        })
        .spawn()
}

/// Waits for `child`, killing it once `timeout` elapses.
///
/// Returns `Ok(None)` if the child had to be killed.
fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
