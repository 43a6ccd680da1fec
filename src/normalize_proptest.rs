//! Property-based tests for descriptor normalization.
//!
//! These tests use proptest to generate random descriptors and verify that
//! the normalization table holds for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::version::{normalize, normalize_versions, VersionInfo};
    use proptest::prelude::*;

    // Hyphen-free fields, as git produces for tags, counts and hashes.
    const TAG: &str = "[a-zA-Z0-9._+]{1,12}";
    const COMMITS: &str = "[0-9]{1,4}";
    const SHA: &str = "g[0-9a-f]{7,12}";

    proptest! {
        /// Property: a descriptor without hyphens is returned unchanged
        #[test]
        fn exact_tag_is_unchanged(tag in TAG) {
            prop_assert_eq!(normalize(&tag).unwrap(), tag);
        }

        /// Property: one hyphen always means a dirty exact tag
        #[test]
        fn dirty_tag_gets_local_suffix(tag in TAG) {
            let descriptor = format!("{}-dirty", tag);
            prop_assert_eq!(normalize(&descriptor).unwrap(), format!("{}+dirty", tag));
        }

        /// Property: TAG-COMMITS-gSHA maps to a post-release dev build
        #[test]
        fn distance_from_tag(tag in TAG, commits in COMMITS, sha in SHA) {
            let descriptor = format!("{}-{}-{}", tag, commits, sha);
            prop_assert_eq!(
                normalize(&descriptor).unwrap(),
                format!("{}.post0.dev{}+{}", tag, commits, sha)
            );
        }

        /// Property: the dirty variant only adds `.dirty` to the local part
        #[test]
        fn distance_from_tag_dirty(tag in TAG, commits in COMMITS, sha in SHA) {
            let clean = normalize(&format!("{}-{}-{}", tag, commits, sha)).unwrap();
            let dirty = normalize(&format!("{}-{}-{}-dirty", tag, commits, sha)).unwrap();
            prop_assert_eq!(dirty, format!("{}.dirty", clean));
        }

        /// Property: four or more hyphens always fail, with the same error
        #[test]
        fn too_many_hyphens_fail(fields in prop::collection::vec(TAG, 5..9)) {
            let descriptor = fields.join("-");
            let first = normalize(&descriptor).unwrap_err();
            let second = normalize(&descriptor).unwrap_err();
            match &first {
                Error::UnparseableDescriptor { hyphens, .. } => {
                    prop_assert_eq!(*hyphens, fields.len() - 1);
                }
                other => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert_eq!(first.to_string(), second.to_string());
        }

        /// Property: normalized output never contains a hyphen for well-formed input
        #[test]
        fn output_is_hyphen_free(tag in TAG, commits in COMMITS, sha in SHA, dirty in any::<bool>()) {
            let mut descriptor = format!("{}-{}-{}", tag, commits, sha);
            if dirty {
                descriptor.push_str("-dirty");
            }
            prop_assert!(!normalize(&descriptor).unwrap().contains('-'));
        }

        /// Property: results without a full revision id never fail to normalize
        #[test]
        fn empty_full_is_total(version in ".*") {
            let normalized = normalize_versions(VersionInfo::new(version.clone(), "")).unwrap();
            prop_assert!(version.starts_with(&normalized.version));
            prop_assert!(!normalized.version.contains('-'));
        }
    }
}
