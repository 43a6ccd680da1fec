//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`.
//!
//! ```bash
//! revstamp completions bash > ~/.local/share/bash-completion/completions/revstamp
//! revstamp completions zsh > ~/.zfunc/_revstamp
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("revstamp"));
        assert!(script.contains("normalize"));
        assert!(script.contains("--tag-prefix"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
