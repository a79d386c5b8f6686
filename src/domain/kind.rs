// Copyright (c) 2025 - Cowboy AI, Inc.
//! Definition Kind Taxonomy
//!
//! The five sub-resource definition kinds a group version may reference.
//! Each kind knows its locator segment, its reference field name and the
//! exact error texts the service reports for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-resource definition kind
///
/// Variant order is the declaration order of the group version reference
/// fields, which is also the order references are validated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Core,
    Device,
    Function,
    Resource,
    Subscription,
}

impl DefinitionKind {
    /// All kinds in reference declaration order
    pub const ALL: [DefinitionKind; 5] = [
        DefinitionKind::Core,
        DefinitionKind::Device,
        DefinitionKind::Function,
        DefinitionKind::Resource,
        DefinitionKind::Subscription,
    ];

    /// Path segment used in definition ARNs (`/greengrass/definition/<segment>/...`)
    pub fn segment(&self) -> &'static str {
        match self {
            DefinitionKind::Core => "cores",
            DefinitionKind::Device => "devices",
            DefinitionKind::Function => "functions",
            DefinitionKind::Resource => "resources",
            DefinitionKind::Subscription => "subscriptions",
        }
    }

    /// Parse a locator path segment
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == segment)
    }

    /// Name of the group version field referencing this kind
    pub fn reference_field(&self) -> &'static str {
        match self {
            DefinitionKind::Core => "CoreDefinitionVersionArn",
            DefinitionKind::Device => "DeviceDefinitionVersionArn",
            DefinitionKind::Function => "FunctionDefinitionVersionArn",
            DefinitionKind::Resource => "ResourceDefinitionVersionArn",
            DefinitionKind::Subscription => "SubscriptionDefinitionVersionArn",
        }
    }

    /// Reason reported when a reference of this kind cannot be resolved
    pub fn missing_reference_reason(&self) -> &'static str {
        match self {
            DefinitionKind::Core => "Cores definition reference does not exist",
            DefinitionKind::Device => "Devices definition reference does not exist",
            DefinitionKind::Function => "Lambda definition reference does not exist",
            DefinitionKind::Resource => "Resource definition reference does not exist",
            DefinitionKind::Subscription => "Subscription definition reference does not exist",
        }
    }

    /// Message for reading an unknown definition of this kind
    pub fn definition_not_found_message(&self) -> &'static str {
        match self {
            DefinitionKind::Core => "That core definition does not exist.",
            DefinitionKind::Device => "That device definition does not exist.",
            DefinitionKind::Function => "That Lambda definition does not exist.",
            DefinitionKind::Resource => "That resource definition does not exist.",
            DefinitionKind::Subscription => "That subscription definition does not exist.",
        }
    }

    /// Message for versioning an unknown definition of this kind
    pub fn version_target_not_found_message(&self) -> &'static str {
        match self {
            DefinitionKind::Core => "That cores does not exist.",
            DefinitionKind::Device => "That devices definition does not exist.",
            DefinitionKind::Function => "That lambdas does not exist.",
            DefinitionKind::Resource => "That resource definition does not exist.",
            DefinitionKind::Subscription => "That subscriptions does not exist.",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment())
    }
}
