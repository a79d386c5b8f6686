// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Aggregate
//!
//! Versioning engine for groups, built from pure functions:
//! - Command handlers validate and emit events: `State → Command → Result<Event, Error>`
//! - State changes only by folding events: `[Event] → State`
//! - Time is a command parameter, never read inside the aggregate
//!
//! # Example Usage
//!
//! ```rust
//! use cim_greengrass::aggregate::*;
//! use cim_greengrass::config::GreengrassConfig;
//! use cim_greengrass::domain::{DefinitionReferences, Timestamp};
//! use cim_greengrass::events::GroupEvent;
//! use cim_greengrass::registry::InMemoryDefinitionRegistry;
//! use cim_greengrass::resolver::ReferenceResolver;
//!
//! let registry = InMemoryDefinitionRegistry::new(GreengrassConfig::default());
//! let resolver = ReferenceResolver::new(&registry);
//! let timestamp = Timestamp::new(chrono::Utc::now());
//!
//! let state = GroupState::default_for("group-1");
//! let created = handle_create_group(
//!     &state,
//!     CreateGroupCommand { name: "TestGroup".to_string(), timestamp },
//! )
//! .unwrap();
//! let state = apply_event(state, &GroupEvent::GroupCreated(created));
//!
//! let version = handle_create_group_version(
//!     &state,
//!     CreateGroupVersionCommand { references: DefinitionReferences::new(), timestamp },
//!     &resolver,
//! )
//! .unwrap();
//! assert_eq!(version.version, 1);
//! ```

pub mod commands;
pub mod group;
pub mod handlers;

pub use commands::*;
pub use group::{apply_event, GroupState, GroupVersionRecord};
pub use handlers::*;
