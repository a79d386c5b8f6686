// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Version Reference Set
//!
//! The (up to five) definition version references a group version carries.
//! Values are kept exactly as the caller supplied them.

use serde::{Deserialize, Serialize};

use crate::domain::DefinitionKind;

/// Reference fields of a group version, one optional entry per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefinitionReferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_definition_version_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_definition_version_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_definition_version_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_definition_version_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_definition_version_arn: Option<String>,
}

impl DefinitionReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference for a kind
    pub fn with(mut self, kind: DefinitionKind, reference: impl Into<String>) -> Self {
        *self.slot_mut(kind) = Some(reference.into());
        self
    }

    /// Reference supplied for a kind
    pub fn get(&self, kind: DefinitionKind) -> Option<&str> {
        match kind {
            DefinitionKind::Core => self.core_definition_version_arn.as_deref(),
            DefinitionKind::Device => self.device_definition_version_arn.as_deref(),
            DefinitionKind::Function => self.function_definition_version_arn.as_deref(),
            DefinitionKind::Resource => self.resource_definition_version_arn.as_deref(),
            DefinitionKind::Subscription => self.subscription_definition_version_arn.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: DefinitionKind) -> &mut Option<String> {
        match kind {
            DefinitionKind::Core => &mut self.core_definition_version_arn,
            DefinitionKind::Device => &mut self.device_definition_version_arn,
            DefinitionKind::Function => &mut self.function_definition_version_arn,
            DefinitionKind::Resource => &mut self.resource_definition_version_arn,
            DefinitionKind::Subscription => &mut self.subscription_definition_version_arn,
        }
    }

    /// Supplied references in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (DefinitionKind, &str)> + '_ {
        DefinitionKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|reference| (kind, reference)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
