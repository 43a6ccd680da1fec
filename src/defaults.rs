//! Default values for revstamp configuration.
//!
//! This module provides centralized default values used by the resolver
//! configuration and the CLI, ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Name of the optional configuration file looked up at the source root.
pub const CONFIG_FILE_NAME: &str = ".revstamp.yaml";

/// Default version file, relative to the source root.
///
/// The same file carries the git-archive keywords in a source checkout and
/// the short generated form in build and distribution trees.
pub const VERSION_FILE: &str = "_version.py";

/// Default prefix stripped from tags (tags look like `v1.2.0`).
pub const TAG_PREFIX: &str = "v";

/// Marker directory whose presence means the root is a git checkout.
pub const VCS_MARKER: &str = ".git";

/// Default upper bound, in seconds, for a single `git` invocation.
pub const VCS_TIMEOUT_SECS: u64 = 30;

/// Sentinel used for both fields when every source abstains.
pub const UNKNOWN: &str = "unknown";

/// Returns the candidate `git` executables for the current platform.
///
/// Commands are started without a shell, so on Windows the wrapper scripts
/// have to be named explicitly.
pub fn vcs_commands() -> Vec<String> {
    if cfg!(windows) {
        vec!["git.cmd".to_string(), "git.exe".to_string()]
    } else {
        vec!["git".to_string()]
    }
}

/// Returns the default timeout for a single VCS invocation.
pub fn vcs_timeout() -> Duration {
    Duration::from_secs(VCS_TIMEOUT_SECS)
}
