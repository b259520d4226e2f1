//! Property tests for reconciling two inventories.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use mono_meta::{Checksum, Comment, Reconciler, Service};

/// Inventory as name -> checksum; names are unique within one inventory
fn inventory() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("[a-z][a-z0-9-]{0,7}", "[0-9a-f]{1,4}", 0..12)
}

fn services(inventory: &BTreeMap<String, String>, reference: &str) -> Vec<Service> {
    // reverse so the reconciler cannot rely on sorted input
    inventory
        .iter()
        .rev()
        .map(|(name, csum)| {
            Service::new(
                name.clone(),
                format!("/repo/services/{}/app", name),
                Checksum::new(csum.clone()),
                reference,
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every name seen on either side appears exactly once.
    #[test]
    fn property_every_name_classified_once(base in inventory(), compare in inventory()) {
        let diffs = Reconciler::new().reconcile(
            services(&base, "refs/heads/base"),
            services(&compare, "refs/heads/compare"),
        );

        let expected: BTreeSet<&String> = base.keys().chain(compare.keys()).collect();
        let names: Vec<&String> = diffs.iter().map(|d| &d.name).collect();
        let unique: BTreeSet<&String> = names.iter().copied().collect();

        prop_assert_eq!(names.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    /// PROPERTY: output is sorted by name ascending.
    #[test]
    fn property_output_sorted_by_name(base in inventory(), compare in inventory()) {
        let diffs = Reconciler::new().reconcile(
            services(&base, "refs/heads/base"),
            services(&compare, "refs/heads/compare"),
        );

        prop_assert!(diffs.windows(2).all(|w| w[0].name < w[1].name));
    }

    /// PROPERTY: the comment follows from presence and checksums alone.
    #[test]
    fn property_classification_matches_sides(base in inventory(), compare in inventory()) {
        let diffs = Reconciler::new().reconcile(
            services(&base, "refs/heads/base"),
            services(&compare, "refs/heads/compare"),
        );

        for diff in &diffs {
            let expected = match (base.get(&diff.name), compare.get(&diff.name)) {
                (None, Some(_)) => Comment::New,
                (Some(_), None) => Comment::Removed,
                (Some(b), Some(c)) if b == c => Comment::Unmodified,
                (Some(_), Some(_)) => Comment::Modified,
                (None, None) => unreachable!("name came from neither side"),
            };
            prop_assert_eq!(diff.comment, expected);
            prop_assert_eq!(diff.changed, expected != Comment::Unmodified);
            prop_assert_eq!(diff.base.is_some(), base.contains_key(&diff.name));
            prop_assert_eq!(diff.compare.is_some(), compare.contains_key(&diff.name));
        }
    }

    /// PROPERTY: an inventory diffed against itself never reports changes.
    #[test]
    fn property_self_diff_is_unmodified(inv in inventory()) {
        let diffs = Reconciler::new().reconcile(
            services(&inv, "refs/heads/master"),
            services(&inv, "refs/heads/master"),
        );

        prop_assert_eq!(diffs.len(), inv.len());
        prop_assert!(diffs.iter().all(|d| d.comment == Comment::Unmodified && !d.changed));
    }
}
