// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Store
//!
//! Application service owning every group. Each method is a transaction:
//! 1. Locate the group (or seed a fresh state)
//! 2. Stamp the command with the clock
//! 3. Handle the command (pure function)
//! 4. Apply the event and append it to the group journal
//!
//! If any step fails nothing is written.
//!
//! # Locking
//!
//! ```text
//! table: RwLock<id → Arc<Mutex<entry>>>
//! ```
//!
//! The table lock is only held to find or insert an entry. Version
//! allocation and append happen under the group's own mutex, so versions of
//! one group are serialized while different groups proceed in parallel.

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregate::*;
use crate::clock::{Clock, SystemClock};
use crate::config::GreengrassConfig;
use crate::domain::{group_arn, group_version_arn, DefinitionReferences, Timestamp};
use crate::errors::{GreengrassError, GreengrassResult};
use crate::events::GroupEvent;
use crate::registry::DefinitionRegistry;
use crate::resolver::ReferenceResolver;

/// Group as reported by create/get/list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupSummary {
    pub arn: String,
    pub creation_timestamp: Timestamp,
    pub id: String,
    pub last_updated_timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_arn: Option<String>,
    pub name: String,
}

/// Group version as reported by create/list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupVersionSummary {
    pub arn: String,
    pub creation_timestamp: Timestamp,
    /// Owning group id
    pub id: String,
    pub version: String,
}

/// Group version including its reference set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupVersionDetail {
    pub arn: String,
    pub creation_timestamp: Timestamp,
    pub definition: DefinitionReferences,
    pub id: String,
    pub version: String,
}

struct GroupEntry {
    state: GroupState,
    events: Vec<GroupEvent>,
}

impl GroupEntry {
    fn record(&mut self, event: GroupEvent) {
        let state = std::mem::replace(&mut self.state, GroupState::default_for(""));
        self.state = apply_event(state, &event);
        self.events.push(event);
    }
}

#[derive(Default)]
struct GroupTable {
    by_id: HashMap<String, Arc<Mutex<GroupEntry>>>,
    order: Vec<String>,
}

/// In-memory group store validating references against a registry
pub struct GroupStore {
    config: GreengrassConfig,
    clock: Arc<dyn Clock>,
    registry: Arc<dyn DefinitionRegistry>,
    table: RwLock<GroupTable>,
}

impl GroupStore {
    /// Store stamping versions with the wall clock
    pub fn new(config: GreengrassConfig, registry: Arc<dyn DefinitionRegistry>) -> Self {
        Self::with_clock(config, registry, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: GreengrassConfig,
        registry: Arc<dyn DefinitionRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            clock,
            registry,
            table: RwLock::new(GroupTable::default()),
        }
    }

    fn entry(&self, group_id: &str) -> GreengrassResult<Arc<Mutex<GroupEntry>>> {
        let entry = self.table.read().by_id.get(group_id).cloned();
        entry.ok_or_else(|| {
            debug!(group_id, "Group lookup missed");
            GreengrassError::group_not_found()
        })
    }

    /// Create a group, optionally with its first version
    ///
    /// An invalid initial version rejects the whole call; no group is stored.
    pub fn create_group(
        &self,
        name: impl Into<String>,
        initial_version: Option<DefinitionReferences>,
    ) -> GreengrassResult<GroupSummary> {
        let group_id = Uuid::now_v7().to_string();
        let timestamp = self.clock.now();
        let mut entry = GroupEntry {
            state: GroupState::default_for(group_id.clone()),
            events: Vec::new(),
        };

        let command = CreateGroupCommand {
            name: name.into(),
            timestamp,
        };
        let created = handle_create_group(&entry.state, command).map_err(|err| {
            warn!(%err, "Rejected group creation");
            GreengrassError::from(err)
        })?;
        entry.record(GroupEvent::GroupCreated(created));

        if let Some(references) = initial_version {
            let command = CreateGroupVersionCommand {
                references,
                timestamp,
            };
            let resolver = ReferenceResolver::new(self.registry.as_ref());
            let version = handle_create_group_version(&entry.state, command, &resolver)
                .map_err(|err| {
                    warn!(%err, "Rejected initial group version");
                    GreengrassError::from(err)
                })?;
            entry.record(GroupEvent::GroupVersionCreated(version));
        }

        let summary = self.summarize(&entry.state);
        let mut table = self.table.write();
        table.order.push(group_id.clone());
        table.by_id.insert(group_id, Arc::new(Mutex::new(entry)));

        info!(group_id = %summary.id, name = %summary.name, "Created group");
        Ok(summary)
    }

    /// Read a group
    pub fn get_group(&self, group_id: &str) -> GreengrassResult<GroupSummary> {
        let entry = self.entry(group_id)?;
        let entry = entry.lock();
        Ok(self.summarize(&entry.state))
    }

    /// All groups in creation order
    pub fn list_groups(&self) -> Vec<GroupSummary> {
        let entries: Vec<_> = {
            let table = self.table.read();
            table
                .order
                .iter()
                .filter_map(|id| table.by_id.get(id).cloned())
                .collect()
        };
        entries
            .iter()
            .map(|entry| self.summarize(&entry.lock().state))
            .collect()
    }

    /// Append a version to a group
    ///
    /// The group must exist; then every supplied reference must resolve,
    /// checked Core, Device, Function, Resource, Subscription. The first
    /// failure is returned and the group is left unchanged.
    pub fn create_group_version(
        &self,
        group_id: &str,
        references: DefinitionReferences,
    ) -> GreengrassResult<GroupVersionSummary> {
        let entry = self.entry(group_id)?;
        let mut entry = entry.lock();

        let command = CreateGroupVersionCommand {
            references,
            timestamp: self.clock.now(),
        };
        let resolver = ReferenceResolver::new(self.registry.as_ref());
        let event = handle_create_group_version(&entry.state, command, &resolver).map_err(|err| {
            warn!(group_id, %err, "Rejected group version");
            GreengrassError::from(err)
        })?;
        let version = event.version;
        entry.record(GroupEvent::GroupVersionCreated(event));

        let record = entry
            .state
            .version(version)
            .ok_or_else(GreengrassError::group_not_found)?;
        info!(group_id, version, "Created group version");
        Ok(self.version_summary(group_id, record))
    }

    /// All versions of a group, oldest first
    pub fn list_group_versions(&self, group_id: &str) -> GreengrassResult<Vec<GroupVersionSummary>> {
        let entry = self.entry(group_id)?;
        let entry = entry.lock();
        Ok(entry
            .state
            .versions
            .iter()
            .map(|record| self.version_summary(group_id, record))
            .collect())
    }

    /// Read one version of a group, including its references
    pub fn get_group_version(
        &self,
        group_id: &str,
        version: &str,
    ) -> GreengrassResult<GroupVersionDetail> {
        let entry = self.entry(group_id)?;
        let entry = entry.lock();
        let record = version
            .parse::<u64>()
            .ok()
            .and_then(|number| entry.state.version(number))
            .ok_or_else(|| GreengrassError::VersionNotFound {
                group_id: group_id.to_string(),
                version: version.to_string(),
            })?;

        let summary = self.version_summary(group_id, record);
        Ok(GroupVersionDetail {
            arn: summary.arn,
            creation_timestamp: summary.creation_timestamp,
            definition: record.references.clone(),
            id: summary.id,
            version: summary.version,
        })
    }

    /// Committed events of a group, oldest first
    pub fn group_events(&self, group_id: &str) -> GreengrassResult<Vec<GroupEvent>> {
        let entry = self.entry(group_id)?;
        let events = entry.lock().events.clone();
        Ok(events)
    }

    fn summarize(&self, state: &GroupState) -> GroupSummary {
        let latest = state.latest_version();
        // Initialized entries always carry both timestamps
        let created = state.created_at.unwrap_or_else(|| self.clock.now());
        GroupSummary {
            arn: group_arn(&self.config, &state.id),
            creation_timestamp: created,
            id: state.id.clone(),
            last_updated_timestamp: state.updated_at.unwrap_or(created),
            latest_version: latest.map(|v| v.version.to_string()),
            latest_version_arn: latest
                .map(|v| group_version_arn(&self.config, &state.id, &v.version.to_string())),
            name: state.name.clone(),
        }
    }

    fn version_summary(&self, group_id: &str, record: &GroupVersionRecord) -> GroupVersionSummary {
        let version = record.version.to_string();
        GroupVersionSummary {
            arn: group_version_arn(&self.config, group_id, &version),
            creation_timestamp: record.created_at,
            id: group_id.to_string(),
            version,
        }
    }
}
