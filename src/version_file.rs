//! # Generated Version File
//!
//! Build and distribution trees carry a short, generated version file in
//! place of the keyword template:
//!
//! ```text
//! version_version = '1.2.0.post0.dev5+gabc1234'
//! version_full = '0123456789abcdef...'
//! def get_versions(default={}, verbose=False):
//!     return {'version': version_version, 'full': version_full}
//! ```
//!
//! This module reads it back ([`versions_from_file`]), renders it
//! ([`render`]) and writes it into a target tree ([`write_version_file`]).
//! Reading matches the two assignments by literal line prefix; the format is
//! a fixed contract with [`render`], not something to parse generally.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use regex::Regex;

use crate::error::Result;
use crate::version::VersionInfo;

/// The assignments found in a generated version file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileVersions {
    pub version: Option<String>,
    pub full: Option<String>,
}

impl FileVersions {
    /// Converts to a [`VersionInfo`] if a version was present.
    ///
    /// A missing `version_full` line is read as an empty full revision id,
    /// which is what [`render`] emits for parent-directory results.
    pub fn into_versions(self) -> Option<VersionInfo> {
        let version = self.version?;
        Some(VersionInfo::new(version, self.full.unwrap_or_default()))
    }
}

/// Extracts the assignments from generated file content.
pub fn parse_version_file(content: &str) -> Result<FileVersions> {
    let version = Regex::new(r"^version_version = '([^']+)'")?;
    let full = Regex::new(r"^version_full = '([^']+)'")?;
    let mut versions = FileVersions::default();

    for line in content.lines() {
        if let Some(caps) = version.captures(line) {
            versions.version = Some(caps[1].to_string());
        }
        if let Some(caps) = full.captures(line) {
            versions.full = Some(caps[1].to_string());
        }
    }

    Ok(versions)
}

/// Reads a generated version file.
///
/// A missing or unreadable file yields no assignments.
pub fn read_version_file(path: &Path) -> Result<FileVersions> {
    match fs::read_to_string(path) {
        Ok(content) => parse_version_file(&content),
        Err(_) => Ok(FileVersions::default()),
    }
}

/// Reads a generated version file and returns its version, if any.
pub fn versions_from_file(path: &Path) -> Option<VersionInfo> {
    match read_version_file(path) {
        Ok(versions) => versions.into_versions(),
        Err(e) => {
            warn!("unable to read version file {}: {}", path.display(), e);
            None
        }
    }
}

/// Renders the short version file for `versions`.
pub fn render(versions: &VersionInfo) -> String {
    format!(
        "
# This file was generated by revstamp from the git
# revision-control system data, or from the parent directory name of an
# unpacked source archive. Distribution tarballs contain a pre-generated copy
# of this file.

version_version = '{version}'
version_full = '{full}'
def get_versions(default={{}}, verbose=False):
    return {{'version': version_version, 'full': version_full}}
",
        version = versions.version,
        full = versions.full,
    )
}

/// Replaces the file at `target` with the rendered version file.
///
/// The old file is unlinked first: release trees are often populated with
/// hardlinks, and writing through one would also change the source checkout.
pub fn write_version_file(target: &Path, versions: &VersionInfo) -> Result<()> {
    info!("Updating {}...", target.display());
    match fs::remove_file(target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(target, render(versions))?;
    Ok(())
}

/// Restores a file to its captured content when dropped.
///
/// Used to stamp the in-tree version file for the duration of a build step.
#[derive(Debug)]
pub struct VersionFileStash {
    path: PathBuf,
    original: Option<Vec<u8>>,
}

impl VersionFileStash {
    /// Captures the current content of `path`. A file that does not exist
    /// yet is removed again on restore.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let original = match fs::read(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, original })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn restore(&self) -> io::Result<()> {
        match &self.original {
            Some(content) => fs::write(&self.path, content),
            None => match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            },
        }
    }
}

impl Drop for VersionFileStash {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore {}: {}", self.path.display(), e);
        }
    }
}
