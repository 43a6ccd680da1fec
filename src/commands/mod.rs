//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `revstamp`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! Commands that resolve a version flatten [`ResolveArgs`] into their own
//! arguments, so every one of them accepts the same configuration overrides.

pub mod completions;
pub mod normalize;
pub mod render;
pub mod run;
pub mod version;
pub mod write;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use revstamp::config::{self, ResolverConfig};
use revstamp::defaults;
use revstamp::resolver::{Resolution, Resolver};

/// Options shared by every command that resolves a version.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Root of the source tree.
    #[arg(long, value_name = "DIR", default_value = ".", env = "REVSTAMP_ROOT")]
    pub root: PathBuf,

    /// Configuration file. Defaults to `.revstamp.yaml` in the root, if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package name; the parent-directory prefix defaults to `<PACKAGE>-`.
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Prefix stripped from tags (e.g. `v` for tags like `v1.2.0`).
    #[arg(long, value_name = "PREFIX")]
    pub tag_prefix: Option<String>,

    /// Prefix of unpacked source directories, e.g. `mypkg-`.
    #[arg(long, value_name = "PREFIX")]
    pub parentdir_prefix: Option<String>,

    /// Version file, relative to the root.
    #[arg(long, value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Seconds to wait for each git invocation.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report why each version source was used or skipped.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ResolveArgs {
    /// Builds the resolver configuration: file values, then CLI overrides.
    pub fn to_config(&self) -> Result<ResolverConfig> {
        let mut config = match &self.config {
            Some(path) => config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
                .with_root(&self.root),
            None => ResolverConfig::load(&self.root).with_context(|| {
                format!(
                    "Failed to load {} from {}",
                    defaults::CONFIG_FILE_NAME,
                    self.root.display()
                )
            })?,
        };

        if let Some(package) = &self.package {
            config = config.with_package(package);
        }
        if let Some(prefix) = &self.tag_prefix {
            config = config.with_tag_prefix(prefix);
        }
        if let Some(prefix) = &self.parentdir_prefix {
            config = config.with_parentdir_prefix(prefix);
        }
        if let Some(path) = &self.version_file {
            config = config.with_version_file(path);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        Ok(config.with_verbose(self.verbose))
    }

    /// Resolves the version with the standard chain.
    pub fn resolve(&self) -> Result<Resolution> {
        resolve_config(&self.to_config()?)
    }
}

/// Resolves the version for an already built configuration.
pub fn resolve_config(config: &ResolverConfig) -> Result<Resolution> {
    Resolver::new(config)
        .resolve_with_origin()
        .context("Failed to resolve version")
}
