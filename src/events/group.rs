// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Domain Events
//!
//! Facts produced by the group command handlers. State changes only by
//! applying one of these.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DefinitionReferences, Timestamp};

/// Group Domain Events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupEvent {
    /// Group was created
    GroupCreated(GroupCreated),

    /// A version was appended to the group
    GroupVersionCreated(GroupVersionCreated),
}

impl GroupEvent {
    pub fn group_id(&self) -> &str {
        match self {
            GroupEvent::GroupCreated(e) => &e.group_id,
            GroupEvent::GroupVersionCreated(e) => &e.group_id,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            GroupEvent::GroupCreated(e) => e.timestamp,
            GroupEvent::GroupVersionCreated(e) => e.timestamp,
        }
    }
}

/// Group was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreated {
    /// Event schema version
    pub event_version: u32,

    /// Unique event ID
    pub event_id: Uuid,

    pub group_id: String,

    pub name: String,

    pub timestamp: Timestamp,
}

/// A version was appended to the group
///
/// `references` are the strings exactly as supplied; each one resolved when
/// the event was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersionCreated {
    /// Event schema version
    pub event_version: u32,

    /// Unique event ID
    pub event_id: Uuid,

    pub group_id: String,

    /// 1-based version number
    pub version: u64,

    pub references: DefinitionReferences,

    pub timestamp: Timestamp,
}
