//! Property-based tests for name normalization and section extraction.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{normalize_name, relative_name};
    use crate::section::{from_path, leading, strip_section, trailing};
    use proptest::prelude::*;
    use std::path::PathBuf;

    /// A relative path of 1-6 simple segments.
    fn rel_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9_-]{1,8}", 1..6).prop_map(|segments| segments.join("/"))
    }

    // ============================================================================
    // relative_name property tests
    // ============================================================================

    proptest! {
        /// Property: names never start or end with a separator
        #[test]
        fn relative_name_has_no_outer_separators(rel in rel_path(), dotgit in any::<bool>()) {
            let base = PathBuf::from("/srv/git");
            let mut repo = base.join(&rel);
            if dotgit {
                repo = repo.join(".git");
            }
            let name = relative_name(&base, &repo);
            prop_assert!(!name.starts_with('/'));
            prop_assert!(!name.ends_with('/'));
            prop_assert!(!name.ends_with("/.git"));
        }

        /// Property: the name is the path below the root, with `/.git` removed
        #[test]
        fn relative_name_strips_root_and_dotgit(rel in rel_path()) {
            let base = PathBuf::from("/srv/git");
            prop_assert_eq!(relative_name(&base, &base.join(&rel).join(".git")), rel.clone());
            prop_assert_eq!(relative_name(&base, &base.join(&rel)), rel);
        }

        /// Property: normalized names never start with a separator
        #[test]
        fn normalize_name_has_no_leading_separator(rel in "[a-z/.]{0,20}") {
            prop_assert!(!normalize_name(&rel).starts_with('/'));
        }
    }

    // ============================================================================
    // section property tests
    // ============================================================================

    proptest! {
        /// Property: a section is always a prefix of the path
        #[test]
        fn section_is_prefix(rel in rel_path(), n in -8i32..8) {
            if let Some(section) = from_path(&rel, n) {
                prop_assert!(rel.starts_with(section));
                prop_assert!(rel[section.len()..].starts_with('/'));
            }
        }

        /// Property: leading(n) keeps exactly n segments
        #[test]
        fn leading_keeps_n_segments(rel in rel_path(), n in 1usize..8) {
            let segments = rel.split('/').count();
            match leading(&rel, n) {
                Some(section) => prop_assert_eq!(section.split('/').count(), n),
                None => prop_assert!(n >= segments),
            }
        }

        /// Property: trailing(n) drops exactly n segments
        #[test]
        fn trailing_drops_n_segments(rel in rel_path(), n in 1usize..8) {
            let segments = rel.split('/').count();
            match trailing(&rel, n) {
                Some(section) => prop_assert_eq!(section.split('/').count(), segments - n),
                None => prop_assert!(n >= segments),
            }
        }

        /// Property: stripping the section leaves the rest of the path
        #[test]
        fn strip_section_leaves_remainder(rel in rel_path(), n in 1i32..4) {
            if let Some(section) = from_path(&rel, n) {
                let rest = strip_section(&rel, section);
                prop_assert_eq!(format!("{}/{}", section, rest), rel);
            }
        }

        /// Property: n = 0 never yields a section
        #[test]
        fn zero_never_yields_section(rel in rel_path()) {
            prop_assert_eq!(from_path(&rel, 0), None);
        }
    }
}
