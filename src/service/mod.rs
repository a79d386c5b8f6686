// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for the Greengrass Control Plane
//!
//! Application services orchestrating the domain logic for the API
//! front-end, which owns wire parsing, routing and HTTP status mapping.
//!
//! # Architecture
//!
//! ```text
//! API front-end
//!     ↓
//! GroupStore (this module) ── Clock
//!     ↓
//! Command Handler → ReferenceResolver → DefinitionRegistry
//!     ↓
//! Event → apply_event → GroupState
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_greengrass::config::GreengrassConfig;
//! use cim_greengrass::domain::{DefinitionKind, DefinitionReferences};
//! use cim_greengrass::service::GreengrassBackend;
//!
//! let backend = GreengrassBackend::new(GreengrassConfig::default());
//! let core = backend
//!     .definitions()
//!     .create_definition(DefinitionKind::Core, "TestCore", Some(serde_json::json!({"Cores": []})));
//!
//! let refs = DefinitionReferences::new()
//!     .with(DefinitionKind::Core, core.latest_version_arn.unwrap());
//! let group = backend.groups().create_group("TestGroup", Some(refs)).unwrap();
//! assert_eq!(group.latest_version.as_deref(), Some("1"));
//! ```

pub mod groups;

use std::sync::Arc;

pub use groups::{GroupStore, GroupSummary, GroupVersionDetail, GroupVersionSummary};

use crate::clock::{Clock, SystemClock};
use crate::config::GreengrassConfig;
use crate::registry::InMemoryDefinitionRegistry;

/// Definition registry and group store sharing one configuration and clock
pub struct GreengrassBackend {
    definitions: Arc<InMemoryDefinitionRegistry>,
    groups: GroupStore,
}

impl GreengrassBackend {
    pub fn new(config: GreengrassConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: GreengrassConfig, clock: Arc<dyn Clock>) -> Self {
        let definitions = Arc::new(InMemoryDefinitionRegistry::with_clock(
            config.clone(),
            clock.clone(),
        ));
        let groups = GroupStore::with_clock(config, definitions.clone(), clock);
        Self {
            definitions,
            groups,
        }
    }

    /// Backend configured from the environment
    pub fn from_env() -> Self {
        Self::new(GreengrassConfig::from_env())
    }

    /// Sibling definition stores
    pub fn definitions(&self) -> &InMemoryDefinitionRegistry {
        &self.definitions
    }

    pub fn groups(&self) -> &GroupStore {
        &self.groups
    }
}
