//! # Parent-Directory Source
//!
//! Source archives conventionally unpack into `<package>-<version>/`. When
//! nothing better is available the version is read off that directory name.
//! This is the weakest evidence in the chain and the only source that leaves
//! the full revision id empty.

use std::path::{self, Path};

use log::log;

use crate::diagnostic_level;
use crate::version::VersionInfo;

/// Derives a version from the base name of `root`.
///
/// A relative root such as `.` is made absolute against the current
/// directory first, so running from inside an unpacked archive works.
pub fn versions_from_parentdir(prefix: &str, root: &Path, verbose: bool) -> Option<VersionInfo> {
    let root = path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let dirname = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match dirname.strip_prefix(prefix) {
        Some(version) => Some(VersionInfo::new(version, "")),
        None => {
            log!(
                diagnostic_level(verbose),
                "guessing rootdir is '{}', but '{}' doesn't start with prefix '{}'",
                root.display(),
                dirname,
                prefix
            );
            None
        }
    }
}
