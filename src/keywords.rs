//! # Keyword Source
//!
//! When a tree is exported with `git archive`, attributes marked `export-subst`
//! have `$Format:...$` placeholders expanded. The version file carries two
//! such keywords:
//!
//! ```text
//! git_refnames = "$Format:%d$"
//! git_full = "$Format:%H$"
//! ```
//!
//! which become, in an exported archive, something like
//!
//! ```text
//! git_refnames = " (HEAD, tag: v2.0, master)"
//! git_full = "1f3c9d0a7e..."
//! ```
//!
//! The file is read as plain text and the two assignments are picked out by
//! line prefix. It is never evaluated.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::log;
use regex::Regex;

use crate::diagnostic_level;
use crate::error::Result;
use crate::version::VersionInfo;

const REFNAMES_KEY: &str = "git_refnames =";
const FULL_KEY: &str = "git_full =";
const PLACEHOLDER: &str = "$Format";
const TAG_MARKER: &str = "tag: ";

/// The raw keyword values found in a version file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    /// Decorated ref names, e.g. `(HEAD, tag: v1.0, master)`.
    pub refnames: Option<String>,
    /// Full commit id.
    pub full: Option<String>,
}

impl Keywords {
    pub fn is_empty(&self) -> bool {
        self.refnames.is_none() && self.full.is_none()
    }
}

/// Extracts the keyword assignments from the file at `path`.
///
/// A missing or unreadable file yields empty keywords.
pub fn read_keywords(path: &Path) -> Result<Keywords> {
    match fs::read_to_string(path) {
        Ok(content) => parse_keywords(&content),
        Err(_) => Ok(Keywords::default()),
    }
}

/// Extracts the keyword assignments from file content.
pub fn parse_keywords(content: &str) -> Result<Keywords> {
    let value = Regex::new(r#"=\s*"(.*)""#)?;
    let mut keywords = Keywords::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(REFNAMES_KEY) {
            if let Some(caps) = value.captures(line) {
                keywords.refnames = Some(caps[1].to_string());
            }
        }
        if trimmed.starts_with(FULL_KEY) {
            if let Some(caps) = value.captures(line) {
                keywords.full = Some(caps[1].to_string());
            }
        }
    }

    Ok(keywords)
}

/// Picks a version out of expanded keywords.
///
/// Returns `None` when the keywords are missing or were never expanded. When
/// no ref carries `tag_prefix`, the full revision id is used as the version.
pub fn versions_from_keywords(
    keywords: &Keywords,
    tag_prefix: &str,
    verbose: bool,
) -> Option<VersionInfo> {
    let level = diagnostic_level(verbose);
    let (Some(refnames), Some(full)) = (&keywords.refnames, &keywords.full) else {
        return None;
    };

    let refnames = refnames.trim();
    if refnames.contains(PLACEHOLDER) {
        log!(level, "keywords are unexpanded, not using");
        return None;
    }
    let full = full.trim();

    let refs: BTreeSet<&str> = refnames
        .trim_matches(|c| c == '(' || c == ')')
        .split(',')
        .map(str::trim)
        .collect();

    // Newer git decorates tags as "tag: foo". Without that marker tags and
    // branches are indistinguishable, so keep only refs containing a digit.
    let mut tags: BTreeSet<&str> = refs
        .iter()
        .filter_map(|r| r.strip_prefix(TAG_MARKER))
        .collect();
    if tags.is_empty() {
        tags = refs
            .iter()
            .copied()
            .filter(|r| r.chars().any(|c| c.is_ascii_digit()))
            .collect();
        let discarded: Vec<&str> = refs.difference(&tags).copied().collect();
        log!(level, "discarding '{}', no digits", discarded.join(","));
    }
    log!(
        level,
        "likely tags: {}",
        tags.iter().copied().collect::<Vec<_>>().join(",")
    );

    // Ascending order prefers "2.0" over "2.0rc1", and also over "2.0.1".
    for tag in &tags {
        if let Some(version) = tag.strip_prefix(tag_prefix) {
            log!(level, "picking {}", version);
            return Some(VersionInfo::new(version, full));
        }
    }

    log!(level, "no suitable tags, using full revision id");
    Some(VersionInfo::new(full, full))
}
