// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command Handlers for the Group Aggregate
//!
//! ```text
//! handle_command(State, Command) → Result<Event, CommandError>
//! ```
//!
//! # Business Rule Enforcement
//!
//! - A group must have a name and can only be created once
//! - Versions can only be appended to an existing group
//! - Every supplied reference must resolve, checked in declaration order;
//!   the first failure rejects the command
//! - Version numbers come from the lifecycle state machine: count + 1

use uuid::Uuid;

use crate::aggregate::commands::*;
use crate::aggregate::group::GroupState;
use crate::events::{GroupCreated, GroupVersionCreated};
use crate::resolver::{ReferenceError, ReferenceResolver};
use crate::state_machine::{LifecycleCommand, StateMachine};

/// Command validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Group has not been created
    #[error("Group not found")]
    GroupNotFound,

    /// Group was already created
    #[error("Group {0} already exists")]
    GroupAlreadyExists(String),

    /// Group name is empty
    #[error("Group name is required")]
    MissingName,

    /// A supplied reference did not resolve
    #[error("Invalid reference: {0}")]
    InvalidReference(#[from] ReferenceError),
}

/// Handle CreateGroup command
///
/// # Business Rules
/// - Name must be non-empty
/// - Group must not already be initialized
pub fn handle_create_group(
    state: &GroupState,
    command: CreateGroupCommand,
) -> Result<GroupCreated, CommandError> {
    if command.name.is_empty() {
        return Err(CommandError::MissingName);
    }

    state
        .lifecycle()
        .transition(&LifecycleCommand::Create)
        .map_err(|_| CommandError::GroupAlreadyExists(state.id.clone()))?;

    Ok(GroupCreated {
        event_version: 1,
        event_id: Uuid::now_v7(),
        group_id: state.id.clone(),
        name: command.name,
        timestamp: command.timestamp,
    })
}

/// Handle CreateGroupVersion command
///
/// # Business Rules
/// - Group must be initialized (checked before any reference)
/// - All supplied references must resolve
///
/// # Returns
/// - Ok(GroupVersionCreated) carrying version `count + 1`
/// - Err(CommandError) with the first failure
pub fn handle_create_group_version(
    state: &GroupState,
    command: CreateGroupVersionCommand,
    resolver: &ReferenceResolver<'_>,
) -> Result<GroupVersionCreated, CommandError> {
    let (_, assigned) = state
        .lifecycle()
        .transition(&LifecycleCommand::AppendVersion)
        .map_err(|_| CommandError::GroupNotFound)?;
    let version = assigned.ok_or(CommandError::GroupNotFound)?;

    resolver.resolve_all(&command.references)?;

    Ok(GroupVersionCreated {
        event_version: 1,
        event_id: Uuid::now_v7(),
        group_id: state.id.clone(),
        version,
        references: command.references,
        timestamp: command.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::apply_event;
    use crate::config::GreengrassConfig;
    use crate::domain::{DefinitionKind, DefinitionReferences, Timestamp};
    use crate::events::GroupEvent;
    use crate::registry::InMemoryDefinitionRegistry;
    use chrono::{TimeZone, Utc};

    fn ts() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap())
    }

    fn created_state() -> GroupState {
        let state = GroupState::default_for("g1");
        let event = handle_create_group(
            &state,
            CreateGroupCommand {
                name: "TestGroup".to_string(),
                timestamp: ts(),
            },
        )
        .unwrap();
        apply_event(state, &GroupEvent::GroupCreated(event))
    }

    fn version_command(references: DefinitionReferences) -> CreateGroupVersionCommand {
        CreateGroupVersionCommand {
            references,
            timestamp: ts(),
        }
    }

    #[test]
    fn test_create_group_requires_name() {
        let state = GroupState::default_for("g1");
        let result = handle_create_group(
            &state,
            CreateGroupCommand {
                name: String::new(),
                timestamp: ts(),
            },
        );
        assert_eq!(result, Err(CommandError::MissingName));
    }

    #[test]
    fn test_create_group_twice() {
        let state = created_state();
        let result = handle_create_group(
            &state,
            CreateGroupCommand {
                name: "Again".to_string(),
                timestamp: ts(),
            },
        );
        assert_eq!(result, Err(CommandError::GroupAlreadyExists("g1".to_string())));
    }

    #[test]
    fn test_version_on_uncreated_group() {
        let registry = InMemoryDefinitionRegistry::new(GreengrassConfig::default());
        let resolver = ReferenceResolver::new(&registry);
        let state = GroupState::default_for("g1");
        // Group existence is checked before references
        let refs = DefinitionReferences::new().with(DefinitionKind::Core, "123");
        let result = handle_create_group_version(&state, version_command(refs), &resolver);
        assert_eq!(result, Err(CommandError::GroupNotFound));
    }

    #[test]
    fn test_version_numbers_follow_count() {
        let registry = InMemoryDefinitionRegistry::new(GreengrassConfig::default());
        let resolver = ReferenceResolver::new(&registry);
        let mut state = created_state();

        for expected in 1..=3 {
            let event =
                handle_create_group_version(&state, version_command(DefinitionReferences::new()), &resolver)
                    .unwrap();
            assert_eq!(event.version, expected);
            state = apply_event(state, &GroupEvent::GroupVersionCreated(event));
        }
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let registry = InMemoryDefinitionRegistry::new(GreengrassConfig::default());
        let resolver = ReferenceResolver::new(&registry);
        let state = created_state();
        let refs = DefinitionReferences::new().with(DefinitionKind::Core, "123");

        let err = handle_create_group_version(&state, version_command(refs), &resolver).unwrap_err();
        match err {
            CommandError::InvalidReference(reference) => {
                assert_eq!(reference.kind, DefinitionKind::Core)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
