//! Property tests for the node registry.

use proptest::prelude::*;
use std::collections::BTreeSet;

use substrate_nodes::{NodeRecord, NodeRegistry, RegistryError};

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Za-z][A-Za-z0-9 _-]{0,15}", 0..24)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn prop_distinct_adds_keep_insertion_order(names in distinct_names()) {
        let mut registry = NodeRegistry::new();
        for (i, name) in names.iter().enumerate() {
            registry.add_node(name.clone(), format!("ws://node-{}:9944", i)).unwrap();
        }

        let stored: Vec<&str> = registry.nodes().iter().map(|n| n.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn prop_duplicate_add_rejected_and_first_kept(
        names in distinct_names(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!names.is_empty());
        let mut registry = NodeRegistry::new();
        for name in &names {
            registry.add_node(name.clone(), "ws://first:9944").unwrap();
        }
        let target = pick.get(&names).clone();

        let result = registry.add_node(target.clone(), "ws://second:9944");

        prop_assert_eq!(result, Err(RegistryError::DuplicateName { name: target.clone() }));
        let matching: Vec<&NodeRecord> =
            registry.nodes().iter().filter(|n| n.name == target).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0].endpoint.as_str(), "ws://first:9944");
        prop_assert_eq!(registry.len(), names.len());
    }

    #[test]
    fn prop_edit_preserves_position(
        names in distinct_names(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!names.is_empty());
        let mut registry = NodeRegistry::new();
        for name in &names {
            registry.add_node(name.clone(), "ws://node:9944").unwrap();
        }
        let index = pick.index(names.len());
        let renamed = format!("{}~edited", names[index]);

        registry
            .edit_node(&names[index], NodeRecord::new(renamed.clone(), "ws://edited:9944"))
            .unwrap();

        prop_assert_eq!(registry.nodes()[index].name.as_str(), renamed.as_str());
        prop_assert_eq!(registry.len(), names.len());
    }

    #[test]
    fn prop_remove_absent_leaves_nodes_unchanged(names in distinct_names()) {
        let mut registry = NodeRegistry::new();
        for name in &names {
            registry.add_node(name.clone(), "ws://node:9944").unwrap();
        }
        let before = registry.nodes().to_vec();

        // Names never start with '#', so this one is always absent
        let result = registry.remove_node("#absent");

        prop_assert!(
            matches!(result, Err(RegistryError::NotFound { .. })),
            "expected NotFound, got {:?}",
            result
        );
        prop_assert_eq!(registry.nodes(), before.as_slice());
    }

    #[test]
    fn prop_connection_never_outlives_selection(
        names in distinct_names(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!names.is_empty());
        let mut registry = NodeRegistry::new();
        for name in &names {
            registry.add_node(name.clone(), "ws://node:9944").unwrap();
        }
        let target = pick.get(&names).clone();
        registry.set_connected(Some(target.as_str()));

        registry.remove_node(&target).unwrap();

        prop_assert_eq!(registry.connected_node(), None);
        prop_assert!(!registry.is_connected());
        registry.set_link_status(true);
        prop_assert!(!registry.is_connected());
    }
}
