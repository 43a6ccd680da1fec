//! # Run Command Implementation
//!
//! This module implements the `run` subcommand. Some build steps (freezing an
//! executable, for instance) package the source tree as it is, so the version
//! file has to be stamped in place for the duration of the step:
//!
//! 1. Capture the current version file.
//! 2. Write the resolved version into it.
//! 3. Run the wrapped command from the source root.
//! 4. Restore the captured file, whatever the outcome.
//!
//! While the wrapped command runs, `revstamp` does not die on SIGINT, SIGTERM
//! or SIGHUP. A terminal Ctrl-C reaches the whole process group, so the
//! command sees it anyway; `revstamp` waits for it to exit and then restores
//! the file. The wrapped command's exit code becomes the exit code of
//! `revstamp`, with `128 + signal` for a command killed by a signal.

use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use revstamp::error::Error;
use revstamp::version_file::{write_version_file, VersionFileStash};

use super::{resolve_config, ResolveArgs};

/// Stamp the version file, run a command, then restore the file
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Command to run, followed by its arguments.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, required = true, num_args = 1..)]
    pub command: Vec<String>,
}

/// Execute the `run` command.
pub fn execute(args: RunArgs) -> Result<()> {
    let config = args.resolve.to_config()?;
    let resolution = resolve_config(&config)?;
    let path = config.version_file_path();

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install signal handler")?;

    let status = {
        let _stash = VersionFileStash::new(&path)?;
        write_version_file(&path, &resolution.versions)?;
        run_wrapped(&args.command, &config.root)?
    };

    if interrupted.load(Ordering::SeqCst) {
        warn!("interrupted, restored {}", path.display());
    }
    if !status.success() {
        info!("{} exited with {}", args.command.join(" "), status);
        std::process::exit(exit_code(status));
    }
    Ok(())
}

fn run_wrapped(command: &[String], cwd: &Path) -> revstamp::error::Result<ExitStatus> {
    let (program, rest) = command.split_first().ok_or_else(|| Error::Command {
        command: String::new(),
        message: "no command given".to_string(),
    })?;

    Command::new(program)
        .args(rest)
        .current_dir(cwd)
        .status()
        .map_err(|e| Error::Command {
            command: command.join(" "),
            message: e.to_string(),
        })
}

/// Maps a child's exit status to a shell-style exit code.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}
