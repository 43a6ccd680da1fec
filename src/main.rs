//! # revstamp CLI
//!
//! This is the binary entry point for the `revstamp` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The version resolution logic lives in the `revstamp` library crate, so the
//! binary stays a thin wrapper that build scripts can replace with direct
//! library calls.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
