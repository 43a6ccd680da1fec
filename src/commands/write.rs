//! # Write Command Implementation
//!
//! This module implements the `write` subcommand, which resolves the version
//! and writes the generated version file into a build or distribution tree.
//!
//! The target is unlinked before writing, so a release tree made of
//! hardlinks into the checkout does not leak the generated file back into
//! the keyword template.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use revstamp::version_file::write_version_file;

use super::{resolve_config, ResolveArgs};

/// Write the generated version file into a build or distribution tree
#[derive(Args, Debug)]
pub struct WriteArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// File to write, e.g. `build/lib/mypkg/_version.py`.
    ///
    /// A directory is treated as the root of a build tree; the configured
    /// version file path is appended to it.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,
}

/// Execute the `write` command.
pub fn execute(args: WriteArgs) -> Result<()> {
    let config = args.resolve.to_config()?;
    let resolution = resolve_config(&config)?;

    let target = if args.target.is_dir() {
        args.target.join(&config.version_file)
    } else {
        args.target
    };

    write_version_file(&target, &resolution.versions)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("{}", resolution.versions.version);
    Ok(())
}
