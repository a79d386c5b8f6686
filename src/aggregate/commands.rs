// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Group Aggregate
//!
//! Commands express intent and can be rejected. They carry their own
//! `timestamp`; handlers never read the wall clock.

use crate::domain::{DefinitionReferences, Timestamp};

/// Command to create a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupCommand {
    /// Display name
    pub name: String,

    /// Timestamp when command was issued
    pub timestamp: Timestamp,
}

/// Command to append a version to a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupVersionCommand {
    /// References supplied by the caller, unvalidated
    pub references: DefinitionReferences,

    /// Timestamp when command was issued
    pub timestamp: Timestamp,
}
