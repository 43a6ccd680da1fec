//! # revstamp
//!
//! This library determines, at build time, the one authoritative version of a
//! source distribution and normalizes it into a canonical, sortable release
//! identifier. It is used by the `revstamp` command-line tool but is meant to
//! be called directly from build and packaging glue as well.
//!
//! ## Quick Example
//!
//! ```
//! use revstamp::config::ResolverConfig;
//! use revstamp::resolver::Resolver;
//! use revstamp::version::normalize;
//!
//! // Normalization on its own
//! assert_eq!(normalize("v1.2.0-5-gabc1234").unwrap(), "v1.2.0.post0.dev5+gabc1234");
//!
//! // Full resolution; an empty directory resolves to the default
//! let dir = tempfile::tempdir().unwrap();
//! let config = ResolverConfig::new(dir.path());
//! let versions = Resolver::new(&config).resolve().unwrap();
//! assert_eq!(versions.version, "unknown");
//! ```
//!
//! ## Core Concepts
//!
//! - **Sources**: each of [`keywords`], [`version_file`], [`git`] and
//!   [`parentdir`] turns one kind of evidence into a raw `(version, full)`
//!   pair, or abstains.
//! - **Resolver (`resolver`)**: tries the sources in order of confidence and
//!   stops at the first answer, falling back to `unknown`.
//! - **Normalization (`version`)**: turns a `git describe` descriptor such as
//!   `v1.2.0-5-gabc1234-dirty` into `v1.2.0.post0.dev5+gabc1234.dirty`.
//! - **Writer (`version_file`)**: renders the resolved version into the short
//!   version file shipped in build and distribution trees.
//!
//! Configuration is an explicit [`config::ResolverConfig`] value; the library
//! holds no global state.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod keywords;
pub mod output;
pub mod parentdir;
pub mod resolver;
pub mod shell;
pub mod version;
pub mod version_file;

#[cfg(test)]
mod normalize_proptest;

/// Log level for source diagnostics: visible by default in verbose mode,
/// otherwise only with debug logging enabled.
pub(crate) fn diagnostic_level(verbose: bool) -> log::Level {
    if verbose {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}
