// Copyright (c) 2025 - Cowboy AI, Inc.
//! Greengrass Domain Models
//!
//! Value objects shared by the registry, the resolver and the group store.
//!
//! - [`DefinitionKind`] - the five referencable sub-resource kinds
//! - [`DefinitionVersionArn`] - typed definition version locator
//! - [`Timestamp`] - millisecond precision UTC instant
//! - [`DefinitionReferences`] - reference set carried by a group version

pub mod arn;
pub mod kind;
pub mod references;
pub mod timestamp;

pub use arn::{definition_arn, group_arn, group_version_arn, ArnError, DefinitionVersionArn};
pub use kind::DefinitionKind;
pub use references::DefinitionReferences;
pub use timestamp::Timestamp;
