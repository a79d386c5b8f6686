// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Aggregate State
//!
//! ```text
//! Command → handle_*() → Result<Event, CommandError>
//!                              ↓
//! Event → apply_event() → New State
//! ```

use crate::domain::{DefinitionReferences, Timestamp};
use crate::events::GroupEvent;
use crate::state_machine::GroupLifecycle;

/// One committed version of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVersionRecord {
    /// 1-based version number
    pub version: u64,

    pub created_at: Timestamp,

    /// References exactly as supplied
    pub references: DefinitionReferences,
}

/// Group aggregate state reconstructed from events
///
/// `versions[i].version == i + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupState {
    pub id: String,

    pub name: String,

    pub versions: Vec<GroupVersionRecord>,

    /// First event timestamp
    pub created_at: Option<Timestamp>,

    /// Latest event timestamp
    pub updated_at: Option<Timestamp>,
}

impl GroupState {
    /// Empty state used as the fold seed
    pub fn default_for(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            versions: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Reconstruct state from an event stream
    pub fn from_events(id: impl Into<String>, events: &[GroupEvent]) -> Self {
        events
            .iter()
            .fold(Self::default_for(id), |state, event| apply_event(state, event))
    }

    /// Whether a GroupCreated event has been applied
    pub fn is_initialized(&self) -> bool {
        self.created_at.is_some()
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> GroupLifecycle {
        if self.is_initialized() {
            GroupLifecycle::existing(self.versions.len())
        } else {
            GroupLifecycle::Absent
        }
    }

    pub fn latest_version(&self) -> Option<&GroupVersionRecord> {
        self.versions.last()
    }

    /// Version by its 1-based number
    pub fn version(&self, version: u64) -> Option<&GroupVersionRecord> {
        let index = usize::try_from(version).ok()?.checked_sub(1)?;
        self.versions.get(index)
    }
}

/// Apply an event to produce the next state
///
/// No validation happens here; the handler already validated.
pub fn apply_event(mut state: GroupState, event: &GroupEvent) -> GroupState {
    match event {
        GroupEvent::GroupCreated(e) => {
            state.id = e.group_id.clone();
            state.name = e.name.clone();
            state.created_at = Some(e.timestamp);
            state.updated_at = Some(e.timestamp);
        }
        GroupEvent::GroupVersionCreated(e) => {
            state.versions.push(GroupVersionRecord {
                version: e.version,
                created_at: e.timestamp,
                references: e.references.clone(),
            });
            state.updated_at = Some(e.timestamp);
        }
    }
    state
}
