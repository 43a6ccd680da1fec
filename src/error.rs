//! # Error Handling
//!
//! This module defines the centralized error type for `revstamp`. It uses
//! `thiserror` to build an `Error` enum with descriptive messages.
//!
//! Most failure modes in version resolution are *not* errors: a missing
//! version file, a missing `.git` directory, an absent or broken `git`
//! executable, or a directory name that does not follow the
//! `<package>-<version>` convention all make the corresponding source
//! abstain, and the resolver moves on to the next one. Those conditions never
//! surface here.
//!
//! What does surface:
//!
//! - A version-control descriptor that cannot be normalized
//!   ([`Error::UnparseableDescriptor`]). This aborts the whole resolution.
//! - Configuration problems (`.revstamp.yaml` with unknown keys or bad types).
//! - Failures of the CLI glue: writing a version file, running a wrapped
//!   command.
//! - I/O, YAML and regex errors wrapped via `#[from]`.

use thiserror::Error;

/// Main error type for revstamp operations
#[derive(Error, Debug)]
pub enum Error {
    /// A version-control descriptor had more hyphen-separated fields than
    /// `TAG-COMMITS-gSHA-dirty`.
    #[error("Unparseable version descriptor '{descriptor}': expected at most 3 '-' separators, found {hyphens}")]
    UnparseableDescriptor { descriptor: String, hyphens: usize },

    /// An error occurred while parsing the `.revstamp.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A command wrapped by the CLI could not be started or was killed.
    #[error("Command failed: {command} - {message}")]
    Command { command: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
