//! # Render Command Implementation
//!
//! Prints the generated version file for the resolved version to stdout, for
//! build systems that place the file themselves.

use anyhow::Result;
use clap::Args;

use revstamp::version_file::render;

use super::ResolveArgs;

/// Print the generated version file for the resolved version
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Execute the `render` command.
pub fn execute(args: RenderArgs) -> Result<()> {
    let resolution = args.resolve.resolve()?;
    print!("{}", render(&resolution.versions));
    Ok(())
}
