//! # Resolver Configuration
//!
//! This module defines [`ResolverConfig`], the explicit configuration passed
//! to the [`Resolver`](crate::resolver::Resolver). Nothing is kept in global
//! state: two resolvers with different configurations can run side by side.
//!
//! ## Sources of Configuration
//!
//! 1. Built-in defaults from [`crate::defaults`].
//! 2. An optional `.revstamp.yaml` at the source root (or any file given to
//!    [`from_file`]).
//! 3. Overrides applied by the caller, typically from CLI flags, through the
//!    `with_*` builder methods.
//!
//! ## File Format
//!
//! ```yaml
//! package: mypkg
//! tag_prefix: v
//! parentdir_prefix: mypkg-
//! version_file: mypkg/_version.py
//! vcs_commands: [git]
//! timeout_secs: 30
//! ```
//!
//! Every key is optional. Unknown keys are rejected so that a typo does not
//! silently fall back to a default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Configuration for one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Root of the source tree. Supplied at runtime, never read from a file.
    #[serde(skip)]
    pub root: PathBuf,
    /// Distribution name. Used to derive the parent-directory prefix.
    pub package: Option<String>,
    /// Prefix stripped from tags before they are used as versions.
    pub tag_prefix: String,
    /// Explicit parent-directory prefix; defaults to `<package>-`.
    pub parentdir_prefix: Option<String>,
    /// Version file relative to `root`.
    pub version_file: PathBuf,
    /// Candidate VCS executables, tried in order.
    pub vcs_commands: Vec<String>,
    /// Upper bound for each VCS invocation.
    pub timeout_secs: u64,
    /// Emit source diagnostics at `info` instead of `debug` level.
    #[serde(skip)]
    pub verbose: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            package: None,
            tag_prefix: defaults::TAG_PREFIX.to_string(),
            parentdir_prefix: None,
            version_file: PathBuf::from(defaults::VERSION_FILE),
            vcs_commands: defaults::vcs_commands(),
            timeout_secs: defaults::VCS_TIMEOUT_SECS,
            verbose: false,
        }
    }
}

impl ResolverConfig {
    /// Creates a default configuration for the given source root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Loads `.revstamp.yaml` from `root` if present, otherwise defaults.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let path = root.join(defaults::CONFIG_FILE_NAME);
        let config = if path.is_file() {
            from_file(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_root(root))
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    pub fn with_parentdir_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parentdir_prefix = Some(prefix.into());
        self
    }

    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = path.into();
        self
    }

    pub fn with_vcs_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vcs_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Effective parent-directory prefix, if one can be determined.
    pub fn parentdir_prefix(&self) -> Option<String> {
        self.parentdir_prefix
            .clone()
            .or_else(|| self.package.as_ref().map(|p| format!("{}-", p)))
    }

    /// Absolute (root-joined) path of the version file.
    pub fn version_file_path(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parses a YAML string into a [`ResolverConfig`] with a default root.
pub fn parse(yaml_content: &str) -> Result<ResolverConfig> {
    // An empty file deserializes to null, which serde rejects for a struct.
    if yaml_content.trim().is_empty() {
        return Ok(ResolverConfig::default());
    }
    serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: hint_for(&e.to_string()),
    })
}

/// Reads and parses a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ResolverConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

fn hint_for(message: &str) -> Option<String> {
    if message.contains("unknown field") {
        Some(
            "Valid keys are: package, tag_prefix, parentdir_prefix, version_file, \
             vcs_commands, timeout_secs"
                .to_string(),
        )
    } else {
        None
    }
}
