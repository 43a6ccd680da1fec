//! # Version Resolver
//!
//! Runs the version sources in a fixed order of confidence and returns the
//! first answer:
//!
//! 1. **Keywords** expanded by `git archive` into the version file.
//! 2. **Version file** previously generated by [`crate::version_file`].
//! 3. **VCS**, a live `git describe` in the source tree.
//! 4. **Parent directory** named `<package>-<version>`.
//! 5. **Default**, `unknown` / `unknown`.
//!
//! A source either finds a [`VersionInfo`] or abstains; abstaining is never
//! an error. Whatever answers is passed through
//! [`normalize_versions`](crate::version::normalize_versions), whose failure
//! on a malformed descriptor is the only error a resolution can return.
//!
//! Nothing is cached between calls. Each [`Resolver::resolve`] re-runs the
//! chain from the start.

use std::fmt;
use std::path::PathBuf;

use log::log;
use serde::{Serialize, Serializer};

use crate::config::ResolverConfig;
use crate::diagnostic_level;
use crate::error::Result;
use crate::git::{self, GitQuery};
use crate::keywords;
use crate::parentdir;
use crate::shell::{CommandRunner, SystemRunner};
use crate::version::{normalize_versions, VersionInfo};
use crate::version_file;

/// Which source produced a resolution.
///
/// Serializes as its [`Display`](fmt::Display) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Keywords,
    VersionFile,
    Vcs,
    Parentdir,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::Keywords => "keywords",
            Origin::VersionFile => "version-file",
            Origin::Vcs => "vcs",
            Origin::Parentdir => "parentdir",
            Origin::Default => "default",
        };
        f.write_str(name)
    }
}

impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A normalized version together with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    #[serde(flatten)]
    pub versions: VersionInfo,
    pub origin: Origin,
}

/// One link in the resolution chain.
pub trait VersionSource {
    fn origin(&self) -> Origin;

    /// Returns the raw, not yet normalized, version or `None` to abstain.
    fn find(&self) -> Option<VersionInfo>;
}

/// Expanded `git archive` keywords in the version file.
pub struct KeywordSource {
    pub path: PathBuf,
    pub tag_prefix: String,
    pub verbose: bool,
}

impl VersionSource for KeywordSource {
    fn origin(&self) -> Origin {
        Origin::Keywords
    }

    fn find(&self) -> Option<VersionInfo> {
        match keywords::read_keywords(&self.path) {
            Ok(kw) => keywords::versions_from_keywords(&kw, &self.tag_prefix, self.verbose),
            Err(e) => {
                log!(
                    diagnostic_level(self.verbose),
                    "unable to read keywords from {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

/// A previously generated short version file.
pub struct VersionFileSource {
    pub path: PathBuf,
}

impl VersionSource for VersionFileSource {
    fn origin(&self) -> Origin {
        Origin::VersionFile
    }

    fn find(&self) -> Option<VersionInfo> {
        version_file::versions_from_file(&self.path)
    }
}

/// A live `git` query against the source tree.
pub struct VcsSource {
    pub config: ResolverConfig,
    pub runner: Box<dyn CommandRunner>,
}

impl VersionSource for VcsSource {
    fn origin(&self) -> Origin {
        Origin::Vcs
    }

    fn find(&self) -> Option<VersionInfo> {
        let query = GitQuery {
            tag_prefix: &self.config.tag_prefix,
            root: &self.config.root,
            commands: &self.config.vcs_commands,
            timeout: Some(self.config.timeout()),
            verbose: self.config.verbose,
        };
        git::versions_from_vcs(&query, self.runner.as_ref())
    }
}

/// The `<package>-<version>` naming convention of the source root.
pub struct ParentDirSource {
    pub prefix: Option<String>,
    pub root: PathBuf,
    pub verbose: bool,
}

impl VersionSource for ParentDirSource {
    fn origin(&self) -> Origin {
        Origin::Parentdir
    }

    fn find(&self) -> Option<VersionInfo> {
        let Some(prefix) = &self.prefix else {
            log!(
                diagnostic_level(self.verbose),
                "no package name or parentdir prefix configured"
            );
            return None;
        };
        parentdir::versions_from_parentdir(prefix, &self.root, self.verbose)
    }
}

/// The ordered chain of version sources.
pub struct Resolver {
    sources: Vec<Box<dyn VersionSource>>,
    verbose: bool,
}

impl Resolver {
    /// Builds the standard chain, running `git` as a child process.
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_runner(config, Box::new(SystemRunner))
    }

    /// Builds the standard chain with a custom command runner for the VCS
    /// source.
    pub fn with_runner(config: &ResolverConfig, runner: Box<dyn CommandRunner>) -> Self {
        let version_file = config.version_file_path();
        let sources: Vec<Box<dyn VersionSource>> = vec![
            Box::new(KeywordSource {
                path: version_file.clone(),
                tag_prefix: config.tag_prefix.clone(),
                verbose: config.verbose,
            }),
            Box::new(VersionFileSource { path: version_file }),
            Box::new(VcsSource {
                config: config.clone(),
                runner,
            }),
            Box::new(ParentDirSource {
                prefix: config.parentdir_prefix(),
                root: config.root.clone(),
                verbose: config.verbose,
            }),
        ];
        Self::from_sources(sources, config.verbose)
    }

    /// Builds a resolver over an arbitrary chain, tried in order.
    pub fn from_sources(sources: Vec<Box<dyn VersionSource>>, verbose: bool) -> Self {
        Self { sources, verbose }
    }

    /// Resolves and normalizes the version.
    pub fn resolve(&self) -> Result<VersionInfo> {
        self.resolve_with_origin().map(|r| r.versions)
    }

    /// Resolves and normalizes the version, reporting which source answered.
    pub fn resolve_with_origin(&self) -> Result<Resolution> {
        let level = diagnostic_level(self.verbose);

        for source in &self.sources {
            let origin = source.origin();
            match source.find() {
                Some(versions) if !versions.version.is_empty() => {
                    log!(level, "got version from {} {:?}", origin, versions);
                    return Ok(Resolution {
                        versions: normalize_versions(versions)?,
                        origin,
                    });
                }
                _ => log!(level, "no version from {}", origin),
            }
        }

        let versions = VersionInfo::unknown();
        log!(level, "got version from default {:?}", versions);
        Ok(Resolution {
            versions: normalize_versions(versions)?,
            origin: Origin::Default,
        })
    }
}

/// Resolves the version for `config` with the standard chain.
pub fn resolve(config: &ResolverConfig) -> Result<VersionInfo> {
    Resolver::new(config).resolve()
}
