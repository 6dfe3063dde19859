//! Property-based tests for splitting and joining.

use super::{join_directory, join_file, split_directory, split_file, PathKind};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_$-]{1,12}"
}

fn parent_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,5}".prop_map(|e| format!(".{e}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A file path without a separator always has an empty parent.
    #[test]
    fn split_file_without_separator_has_empty_parent(
        base in segment_strategy(),
        ext in extension_strategy(),
    ) {
        let path = format!("{base}{ext}");
        let parts = split_file(&path).unwrap();
        prop_assert_eq!(parts.parent(), "");
        prop_assert!(parts.extension().starts_with('.'));
    }

    // Joining then splitting returns the original components.
    #[test]
    fn join_then_split_file_round_trips(
        parent in parent_strategy(),
        base in segment_strategy(),
        ext in extension_strategy(),
    ) {
        let joined = join_file(&parent, &base, &ext);
        let parts = split_file(&joined).unwrap();
        prop_assert_eq!(parts.parent(), parent.as_str());
        prop_assert_eq!(parts.base_name(), base.as_str());
        prop_assert_eq!(parts.extension(), ext.as_str());
    }

    #[test]
    fn join_then_split_directory_round_trips(
        parent in parent_strategy(),
        name in segment_strategy(),
    ) {
        let joined = join_directory(&parent, &name);
        let parts = split_directory(&joined);
        prop_assert_eq!(parts.parent(), parent.as_str());
        prop_assert_eq!(parts.name(), name.as_str());
        prop_assert_eq!(PathKind::classify(&joined), PathKind::Directory);
    }

    // Assembled paths never contain a backslash.
    #[test]
    fn joined_paths_have_no_backslashes(
        parts in prop::collection::vec(segment_strategy(), 1..6),
        ext in extension_strategy(),
    ) {
        let parent = parts.join("\\");
        prop_assert!(!join_file(&parent, "f", &ext).contains('\\'));
        prop_assert!(!join_directory(&parent, "d").contains('\\'));
    }
}
