// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Reference Parsing and Resolution

use cim_greengrass::config::GreengrassConfig;
use cim_greengrass::domain::{DefinitionKind, DefinitionVersionArn};
use cim_greengrass::registry::InMemoryDefinitionRegistry;
use cim_greengrass::resolver::{ParsedReference, ReferenceFailure, ReferenceResolver};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = DefinitionKind> {
    prop::sample::select(DefinitionKind::ALL.to_vec())
}

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,35}"
}

proptest! {
    /// Plain tokens are always bare versions, carried unchanged
    #[test]
    fn prop_plain_token_is_bare_version(token in "[A-Za-z0-9_.-]{1,40}") {
        prop_assume!(!token.starts_with("arn"));
        prop_assert_eq!(
            ParsedReference::parse(&token),
            Ok(ParsedReference::BareVersion(token.clone()))
        );
    }

    /// Tokens carrying a separator are never bare versions
    #[test]
    fn prop_separator_token_is_malformed(
        head in "[a-z0-9]{0,10}",
        sep in prop::sample::select(vec![":", "/", " ", "\t"]),
        tail in "[a-z0-9]{0,10}",
    ) {
        prop_assume!(!head.starts_with("arn"));
        let token = format!("{head}{sep}{tail}");
        let parsed = ParsedReference::parse(&token);
        prop_assert!(matches!(parsed, Err(ReferenceFailure::MalformedToken(_))));
    }

    /// Every locator the emulator hands out parses back to its parts
    #[test]
    fn prop_generated_locator_parses(
        kind in any_kind(),
        definition_id in id_strategy(),
        version_id in id_strategy(),
    ) {
        let arn = DefinitionVersionArn::new(
            &GreengrassConfig::default(),
            kind,
            definition_id.clone(),
            version_id.clone(),
        );
        let parsed = DefinitionVersionArn::parse(&arn.to_string()).unwrap();
        prop_assert_eq!(parsed.kind(), kind);
        prop_assert_eq!(parsed.definition_id(), definition_id.as_str());
        prop_assert_eq!(parsed.version_id(), version_id.as_str());
    }

    /// Nothing resolves against an empty registry, and the reason names the kind
    #[test]
    fn prop_empty_registry_rejects_everything(kind in any_kind(), raw in ".{0,60}") {
        let registry = InMemoryDefinitionRegistry::new(GreengrassConfig::default());
        let resolver = ReferenceResolver::new(&registry);
        let err = resolver.resolve(kind, &raw).unwrap_err();
        prop_assert_eq!(err.kind, kind);
        prop_assert_eq!(err.to_string(), kind.missing_reference_reason());
    }
}
