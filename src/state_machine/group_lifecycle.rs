// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Lifecycle State Machine
//!
//! Mealy machine governing version numbering of a group.
//!
//! # States
//!
//! - Absent: no group with this id
//! - Empty: group exists, no versions yet
//! - Versioned(n): group has versions 1..=n
//!
//! # Inputs
//!
//! - Create: Absent → Empty
//! - AppendVersion: Empty → Versioned(1), Versioned(n) → Versioned(n + 1)
//!
//! # Outputs
//!
//! The version number assigned by `AppendVersion`, `None` otherwise.
//! There is no terminal state and no transition removes a version.

use super::{StateMachine, TransitionError, TransitionResult};

/// Lifecycle state of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLifecycle {
    Absent,
    Empty,
    Versioned(u64),
}

/// Lifecycle command (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Create the group
    Create,

    /// Append the next version
    AppendVersion,
}

impl GroupLifecycle {
    /// State of an existing group holding `count` versions
    pub fn existing(count: usize) -> Self {
        match count {
            0 => GroupLifecycle::Empty,
            n => GroupLifecycle::Versioned(n as u64),
        }
    }

    /// Number of versions recorded so far
    pub fn version_count(&self) -> u64 {
        match self {
            GroupLifecycle::Absent | GroupLifecycle::Empty => 0,
            GroupLifecycle::Versioned(n) => *n,
        }
    }
}

impl StateMachine for GroupLifecycle {
    type Input = LifecycleCommand;
    type Output = Option<u64>;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use GroupLifecycle::*;
        use LifecycleCommand::*;

        match (self, input) {
            (Absent, Create) => Ok((Empty, None)),
            (Absent, AppendVersion) => Err(TransitionError::PreconditionFailed(
                "group does not exist".to_string(),
            )),
            (Empty | Versioned(_), Create) => Err(TransitionError::InvalidTransition {
                from: format!("{:?}", self),
                to: "Empty".to_string(),
            }),
            (Empty, AppendVersion) => Ok((Versioned(1), Some(1))),
            (Versioned(n), AppendVersion) => {
                let next = n + 1;
                Ok((Versioned(next), Some(next)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_append() {
        let (state, output) = GroupLifecycle::Absent
            .transition(&LifecycleCommand::Create)
            .unwrap();
        assert_eq!(state, GroupLifecycle::Empty);
        assert_eq!(output, None);

        let (state, output) = state.transition(&LifecycleCommand::AppendVersion).unwrap();
        assert_eq!(state, GroupLifecycle::Versioned(1));
        assert_eq!(output, Some(1));

        let (state, output) = state.transition(&LifecycleCommand::AppendVersion).unwrap();
        assert_eq!(state, GroupLifecycle::Versioned(2));
        assert_eq!(output, Some(2));
    }

    #[test]
    fn test_append_to_absent_fails() {
        assert!(matches!(
            GroupLifecycle::Absent.transition(&LifecycleCommand::AppendVersion),
            Err(TransitionError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn test_create_twice_fails() {
        assert!(!GroupLifecycle::Empty.can_transition(&LifecycleCommand::Create));
        assert!(!GroupLifecycle::Versioned(3).can_transition(&LifecycleCommand::Create));
    }

    #[test]
    fn test_existing() {
        assert_eq!(GroupLifecycle::existing(0), GroupLifecycle::Empty);
        assert_eq!(GroupLifecycle::existing(4), GroupLifecycle::Versioned(4));
        assert_eq!(GroupLifecycle::existing(4).version_count(), 4);
        assert_eq!(GroupLifecycle::Absent.version_count(), 0);
    }
}
