//! # Version Data Model and Normalization
//!
//! [`VersionInfo`] is the single value produced by a resolution: a version
//! string plus the full revision id it was derived from. Sources return raw
//! values; before a `VersionInfo` leaves the resolver it is passed through
//! [`normalize_versions`], which turns a `git describe` descriptor into a
//! canonical, sortable release identifier.
//!
//! ## Descriptor Normalization
//!
//! The descriptor is classified purely by its number of `-` separators:
//!
//! | hyphens | shape                    | result                            |
//! |---------|--------------------------|-----------------------------------|
//! | 0       | `TAG`                    | `TAG`                             |
//! | 1       | `TAG-dirty`              | `TAG+dirty`                       |
//! | 2       | `TAG-COMMITS-gSHA`       | `TAG.post0.devCOMMITS+gSHA`       |
//! | 3       | `TAG-COMMITS-gSHA-dirty` | `TAG.post0.devCOMMITS+gSHA.dirty` |
//! | 4+      |                          | [`Error::UnparseableDescriptor`]  |
//!
//! Values that came from a parent directory name carry an empty `full` and
//! are only truncated at their first hyphen.

use serde::{Deserialize, Serialize};

use crate::defaults::UNKNOWN;
use crate::error::{Error, Result};

/// A resolved `(version, full)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Release identifier. Raw descriptor before normalization, canonical
    /// form afterwards.
    pub version: String,
    /// Full revision id, suffixed with `-dirty` when the working tree had
    /// local modifications. Empty only for parent-directory results.
    pub full: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            full: full.into(),
        }
    }

    /// The terminal value of the chain when no source has any evidence.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }

    /// Version truncated at its first `-`.
    ///
    /// Documentation builds use this as the short "version" and the full
    /// string as the "release".
    pub fn short_version(&self) -> &str {
        self.version
            .split_once('-')
            .map_or(self.version.as_str(), |(head, _)| head)
    }
}

/// Converts a `git describe --tags --dirty --always` descriptor into a
/// canonical release identifier.
///
/// ```
/// use revstamp::version::normalize;
///
/// assert_eq!(normalize("v1.2.0").unwrap(), "v1.2.0");
/// assert_eq!(normalize("v1.2.0-dirty").unwrap(), "v1.2.0+dirty");
/// assert_eq!(normalize("v1.2.0-5-gabc1234").unwrap(), "v1.2.0.post0.dev5+gabc1234");
/// assert!(normalize("v1.2.0-5-gabc1234-dirty-extra").is_err());
/// ```
pub fn normalize(descriptor: &str) -> Result<String> {
    let parts: Vec<&str> = descriptor.split('-').collect();
    match parts.as_slice() {
        [_] => Ok(descriptor.to_string()),
        // The second field is not inspected: one separator always means dirty.
        [tag, _] => Ok(format!("{}+dirty", tag)),
        [tag, commits, sha] => Ok(format!("{}.post0.dev{}+{}", tag, commits, sha)),
        [tag, commits, sha, _] => Ok(format!("{}.post0.dev{}+{}.dirty", tag, commits, sha)),
        _ => Err(Error::UnparseableDescriptor {
            descriptor: descriptor.to_string(),
            hyphens: parts.len() - 1,
        }),
    }
}

/// Returns true if `version` has to go through [`normalize`] before it can
/// be handed to packaging tools.
///
/// Only results carrying a full revision id are descriptors; a parent
/// directory name is already a release identifier.
pub fn needs_normalization(versions: &VersionInfo) -> bool {
    !versions.full.is_empty()
}

/// Applies the normalization rules to a raw resolution result.
pub fn normalize_versions(versions: VersionInfo) -> Result<VersionInfo> {
    let version = if needs_normalization(&versions) {
        normalize(&versions.version)?
    } else {
        versions.short_version().to_string()
    };
    Ok(VersionInfo {
        version,
        full: versions.full,
    })
}
