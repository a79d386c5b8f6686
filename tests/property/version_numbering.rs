// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Group Version Numbering
//!
//! Whatever mix of accepted and rejected versions a group sees, its
//! committed versions are numbered 1..=n with no gaps.

use std::sync::Arc;

use cim_greengrass::config::GreengrassConfig;
use cim_greengrass::domain::{DefinitionKind, DefinitionReferences};
use cim_greengrass::registry::InMemoryDefinitionRegistry;
use cim_greengrass::service::GroupStore;
use proptest::prelude::*;

/// One attempted version
#[derive(Debug, Clone)]
enum Attempt {
    /// Empty reference set, always accepted
    Empty,
    /// References the stored definition of this kind
    Valid(DefinitionKind),
    /// Dangling reference of this kind
    Dangling(DefinitionKind),
}

fn attempt_strategy() -> impl Strategy<Value = Attempt> {
    let kind = prop::sample::select(DefinitionKind::ALL.to_vec());
    prop_oneof![
        Just(Attempt::Empty),
        kind.clone().prop_map(Attempt::Valid),
        kind.prop_map(Attempt::Dangling),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_versions_are_gap_free(attempts in prop::collection::vec(attempt_strategy(), 0..30)) {
        let config = GreengrassConfig::default();
        let registry = Arc::new(InMemoryDefinitionRegistry::new(config.clone()));
        let arns: Vec<(DefinitionKind, String)> = DefinitionKind::ALL
            .iter()
            .map(|&kind| {
                let def = registry.create_definition(kind, "def", Some(serde_json::json!({})));
                (kind, def.latest_version_arn.unwrap())
            })
            .collect();
        let store = GroupStore::new(config, registry);
        let group = store.create_group("TestGroup", None).unwrap();

        let mut accepted = 0u64;
        for attempt in &attempts {
            let references = match attempt {
                Attempt::Empty => DefinitionReferences::new(),
                Attempt::Valid(kind) => {
                    let (_, arn) = arns.iter().find(|(k, _)| k == kind).unwrap();
                    DefinitionReferences::new().with(*kind, arn.clone())
                }
                Attempt::Dangling(kind) => DefinitionReferences::new().with(*kind, "123"),
            };
            let result = store.create_group_version(&group.id, references);
            match attempt {
                Attempt::Dangling(_) => prop_assert!(result.is_err()),
                _ => {
                    accepted += 1;
                    prop_assert_eq!(result.unwrap().version, accepted.to_string());
                }
            }
        }

        let numbers: Vec<String> = store
            .list_group_versions(&group.id)
            .unwrap()
            .into_iter()
            .map(|v| v.version)
            .collect();
        let expected: Vec<String> = (1..=accepted).map(|n| n.to_string()).collect();
        prop_assert_eq!(numbers, expected);
        prop_assert_eq!(
            store.get_group(&group.id).unwrap().latest_version,
            (accepted > 0).then(|| accepted.to_string())
        );
    }
}
