//! # Version Command Implementation
//!
//! This module implements the `version` subcommand, which resolves the
//! version of the source tree and prints it.
//!
//! ## Output
//!
//! - Default: `Version: <version>`
//! - `--full`: additionally `Full: <revision id>` and the source that answered
//! - `--json`: `{"version": ..., "full": ..., "origin": ...}` for scripts
//!
//! This command is read-only; it never writes the version file.

use anyhow::Result;
use clap::Args;

use revstamp::output::{dim, highlight, OutputConfig};

use super::ResolveArgs;

/// Resolve and print the version
#[derive(Args, Debug)]
pub struct VersionArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Also print the full revision id and the source of the version.
    #[arg(long)]
    pub full: bool,

    /// Print the resolution as JSON.
    #[arg(long, conflicts_with = "full")]
    pub json: bool,
}

/// Execute the `version` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: VersionArgs, color_flag: &str) -> Result<()> {
    let resolution = args.resolve.resolve()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    let out = OutputConfig::from_env_and_flag(color_flag);
    println!("Version: {}", highlight(&out, &resolution.versions.version));
    if args.full {
        println!("Full: {}", resolution.versions.full);
        println!("Source: {}", dim(&out, &resolution.origin.to_string()));
    }

    Ok(())
}
