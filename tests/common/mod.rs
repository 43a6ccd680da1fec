//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_generated_version("1.0", "abc");
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::files;
    pub use super::TestFixture;
}

/// Version file contents for testing.
#[allow(dead_code)]
pub mod files {
    /// Keyword template as committed, before `git archive` expands it.
    pub const UNEXPANDED_KEYWORDS: &str = r#"
git_refnames = "$Format:%d$"
git_full = "$Format:%H$"
"#;

    /// Keywords as expanded in an archive of a tagged commit.
    pub const EXPANDED_KEYWORDS: &str = r#"
git_refnames = " (HEAD, tag: v2.0, tag: v2.0rc1, master)"
git_full = "1f3c9d0a7e5b4c2d1e0f9a8b7c6d5e4f3a2b1c0d"
"#;

    /// A generated short version file.
    pub const GENERATED: &str = "
version_version = '1.4.2'
version_full = '0123456789abcdef'
def get_versions(default={}, verbose=False):
    return {'version': version_version, 'full': version_full}
";
}

/// A test fixture that provides a temporary source tree.
pub struct TestFixture {
    /// The temporary directory for this test.
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Creates a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    /// Writes `_version.py` at the root with the given content.
    pub fn with_version_file(self, content: &str) -> Self {
        self.temp.child("_version.py").write_str(content).unwrap();
        self
    }

    /// Writes a generated short version file at the root.
    pub fn with_generated_version(self, version: &str, full: &str) -> Self {
        let content = format!("version_version = '{}'\nversion_full = '{}'\n", version, full);
        self.with_version_file(&content)
    }

    /// Writes `.revstamp.yaml` at the root.
    pub fn with_config(self, content: &str) -> Self {
        self.temp.child(".revstamp.yaml").write_str(content).unwrap();
        self
    }

    /// Creates a source directory named `name` inside the fixture and
    /// returns its path.
    pub fn source_dir(&self, name: &str) -> std::path::PathBuf {
        let dir = self.temp.child(name);
        dir.create_dir_all().unwrap();
        dir.path().to_path_buf()
    }

    /// Returns the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Returns a child path within the temporary directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
