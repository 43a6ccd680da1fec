//! # Normalize Command Implementation
//!
//! Runs the descriptor normalization on its own, without resolving anything.
//! Useful for checking what a given `git describe` output turns into.

use anyhow::Result;
use clap::Args;

use revstamp::version::normalize;

/// Normalize a git describe descriptor
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Descriptor as printed by `git describe --tags --dirty --always`,
    /// with any tag prefix already removed if it should not be kept.
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: String,
}

/// Execute the `normalize` command.
pub fn execute(args: NormalizeArgs) -> Result<()> {
    println!("{}", normalize(args.descriptor.trim())?);
    Ok(())
}
