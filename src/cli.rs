//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// revstamp - Resolve a distribution's version from VCS metadata
#[derive(Parser, Debug)]
#[command(name = "revstamp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and print the version
    Version(commands::version::VersionArgs),

    /// Normalize a git describe descriptor
    Normalize(commands::normalize::NormalizeArgs),

    /// Print the generated version file for the resolved version
    Render(commands::render::RenderArgs),

    /// Write the generated version file into a build or distribution tree
    Write(commands::write::WriteArgs),

    /// Stamp the version file, run a command, then restore the file
    Run(commands::run::RunArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Logs go to stderr so stdout only carries command output.
        let _ = env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .format_timestamp(None)
            .format_target(false)
            .try_init();

        match self.command {
            Commands::Version(args) => commands::version::execute(args, &self.color),
            Commands::Normalize(args) => commands::normalize::execute(args),
            Commands::Render(args) => commands::render::execute(args),
            Commands::Write(args) => commands::write::execute(args),
            Commands::Run(args) => commands::run::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
