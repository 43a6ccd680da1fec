//! # Live VCS Source
//!
//! Asks `git` for the version of a checked-out source tree. This is only
//! reached when the keywords were not expanded and no generated version file
//! exists, i.e. when building from a working copy.
//!
//! Two commands are run from the tree root:
//!
//! - `git describe --tags --dirty --always` for the descriptor,
//! - `git rev-parse HEAD` for the full revision id.
//!
//! A descriptor that does not start with the tag prefix (including the bare
//! short hash `--always` falls back to when there is no tag) makes the source
//! abstain.

use std::path::Path;
use std::time::Duration;

use log::log;

use crate::defaults::VCS_MARKER;
use crate::diagnostic_level;
use crate::shell::{CommandRunner, RunOptions};
use crate::version::VersionInfo;

pub const DESCRIBE_ARGS: [&str; 4] = ["describe", "--tags", "--dirty", "--always"];
pub const REV_PARSE_ARGS: [&str; 2] = ["rev-parse", "HEAD"];

const DIRTY_SUFFIX: &str = "-dirty";

/// Parameters for a live `git` query.
#[derive(Debug, Clone)]
pub struct GitQuery<'a> {
    pub tag_prefix: &'a str,
    pub root: &'a Path,
    pub commands: &'a [String],
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

/// Returns true if `root` looks like a git checkout.
///
/// `.git` may be a directory or, for worktrees and submodules, a file.
pub fn is_checkout(root: &Path) -> bool {
    root.join(VCS_MARKER).exists()
}

/// Queries `git` for the raw descriptor and full revision id.
///
/// The returned version is the descriptor with the tag prefix removed; it
/// still needs normalization. A dirty tree is flagged on `full` as well.
pub fn versions_from_vcs(query: &GitQuery<'_>, runner: &dyn CommandRunner) -> Option<VersionInfo> {
    let level = diagnostic_level(query.verbose);

    if !is_checkout(query.root) {
        log!(level, "no {} in {}", VCS_MARKER, query.root.display());
        return None;
    }

    let options = RunOptions {
        verbose: query.verbose,
        hide_stderr: false,
        timeout: query.timeout,
    };

    let descriptor = runner.run(query.commands, &DESCRIBE_ARGS, query.root, &options)?;
    let Some(tag) = descriptor.strip_prefix(query.tag_prefix) else {
        log!(
            level,
            "tag '{}' doesn't start with prefix '{}'",
            descriptor,
            query.tag_prefix
        );
        return None;
    };

    let mut full = runner
        .run(query.commands, &REV_PARSE_ARGS, query.root, &options)?
        .trim()
        .to_string();
    if tag.ends_with(DIRTY_SUFFIX) {
        full.push_str(DIRTY_SUFFIX);
    }

    Some(VersionInfo::new(tag, full))
}
