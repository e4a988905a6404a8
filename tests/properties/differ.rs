//! Property tests for key-presence diffing.

use std::collections::HashSet;

use proptest::prelude::*;

use keymirror::{Differ, KeyEntry, KeySnapshot};

fn snapshot() -> impl Strategy<Value = KeySnapshot> {
    // Small key alphabet so snapshots overlap and contain duplicates.
    proptest::collection::vec(("[a-e]{1,2}", "[0-9]{0,2}"), 0..=10)
        .prop_map(|pairs| pairs.into_iter().map(KeyEntry::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Comparing a snapshot with itself never reports a change.
    #[test]
    fn property_diff_self_is_empty(s in snapshot()) {
        let diff = Differ::new().diff(&s, &s);
        prop_assert!(diff.is_empty());
    }

    /// PROPERTY: Swapping the arguments swaps added and removed.
    #[test]
    fn property_diff_is_symmetric(a in snapshot(), b in snapshot()) {
        let differ = Differ::new();
        let forward = differ.diff(&a, &b);
        let backward = differ.diff(&b, &a);
        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
    }

    /// PROPERTY: Added keys are exactly the current keys missing from previous.
    #[test]
    fn property_added_matches_set_difference(a in snapshot(), b in snapshot()) {
        let diff = Differ::new().diff(&a, &b);
        let previous: HashSet<&str> = a.keys().collect();

        for entry in &diff.added {
            prop_assert!(!previous.contains(entry.key()));
        }
        let expected = b.keys().filter(|k| !previous.contains(k)).count();
        prop_assert_eq!(diff.added.len(), expected);
    }

    /// PROPERTY: Value-only edits never produce a diff.
    #[test]
    fn property_value_changes_are_invisible(s in snapshot(), suffix in "[x-z]{1,3}") {
        let edited: KeySnapshot = s
            .entries()
            .iter()
            .map(|e| KeyEntry::new(e.key(), format!("{}{}", e.value(), suffix)))
            .collect();
        prop_assert!(Differ::new().diff(&s, &edited).is_empty());
    }
}
