// Copyright (c) 2025 - Cowboy AI, Inc.
//! Definition Registry
//!
//! Opaque identifier stores for the five sub-resource definition kinds.
//! The validation engine only sees the read side ([`DefinitionRegistry`]);
//! the population side (`create_definition`, `create_definition_version`)
//! stands in for the sibling definition APIs and never interprets payloads.
//!
//! # Layout
//!
//! ```text
//! kind → definition-id → [version-id, ...]
//! ```
//!
//! Each kind has its own lock. Lookups take shared read locks and may run
//! concurrently with each other.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::GreengrassConfig;
use crate::domain::{definition_arn, DefinitionKind, DefinitionVersionArn, Timestamp};
use crate::errors::{GreengrassError, GreengrassResult};

/// Read-only lookup used by the reference resolver
pub trait DefinitionRegistry: Send + Sync {
    /// Whether `version_id` is a known version of definition `definition_id`
    ///
    /// An unknown definition and an unknown version are the same outcome.
    fn exists(&self, kind: DefinitionKind, definition_id: &str, version_id: &str) -> bool;

    /// Definition of the given kind owning `version_id`, if any
    fn find_definition_for_version(&self, kind: DefinitionKind, version_id: &str)
        -> Option<String>;
}

/// Stored definition version
#[derive(Debug, Clone)]
struct DefinitionVersionRecord {
    arn: DefinitionVersionArn,
    payload: serde_json::Value,
}

impl DefinitionVersionRecord {
    fn version_id(&self) -> &str {
        self.arn.version_id()
    }
}

/// Stored definition with its version history
#[derive(Debug, Clone)]
struct DefinitionRecord {
    id: String,
    arn: String,
    name: String,
    created: Timestamp,
    updated: Timestamp,
    versions: Vec<DefinitionVersionRecord>,
}

impl DefinitionRecord {
    fn has_version(&self, version_id: &str) -> bool {
        self.versions.iter().any(|v| v.version_id() == version_id)
    }

    fn summary(&self) -> DefinitionSummary {
        let latest = self.versions.last();
        DefinitionSummary {
            id: self.id.clone(),
            arn: self.arn.clone(),
            name: self.name.clone(),
            creation_timestamp: self.created,
            last_updated_timestamp: self.updated,
            latest_version: latest.map(|v| v.version_id().to_string()),
            latest_version_arn: latest.map(|v| v.arn.to_string()),
        }
    }
}

#[derive(Debug, Default)]
struct KindStore {
    definitions: HashMap<String, DefinitionRecord>,
    order: Vec<String>,
}

/// Definition as reported by create/get/list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefinitionSummary {
    pub id: String,
    pub arn: String,
    pub name: String,
    pub creation_timestamp: Timestamp,
    pub last_updated_timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_arn: Option<String>,
}

/// Definition version as reported by create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefinitionVersionSummary {
    pub arn: String,
    pub creation_timestamp: Timestamp,
    pub id: String,
    pub version: String,
}

/// In-process registry for all five kinds
pub struct InMemoryDefinitionRegistry {
    config: GreengrassConfig,
    clock: Arc<dyn Clock>,
    stores: [RwLock<KindStore>; 5],
}

impl InMemoryDefinitionRegistry {
    /// Registry stamping definitions with the wall clock
    pub fn new(config: GreengrassConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: GreengrassConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            stores: Default::default(),
        }
    }

    fn store(&self, kind: DefinitionKind) -> &RwLock<KindStore> {
        &self.stores[kind as usize]
    }

    /// Create a definition, optionally with its first version
    pub fn create_definition(
        &self,
        kind: DefinitionKind,
        name: impl Into<String>,
        initial_version: Option<serde_json::Value>,
    ) -> DefinitionSummary {
        let now = self.clock.now();
        let id = Uuid::now_v7().to_string();
        let mut record = DefinitionRecord {
            arn: definition_arn(&self.config, kind, &id),
            id: id.clone(),
            name: name.into(),
            created: now,
            updated: now,
            versions: Vec::new(),
        };
        if let Some(payload) = initial_version {
            self.append_version(kind, &mut record, payload, now);
        }
        let summary = record.summary();

        let mut store = self.store(kind).write();
        store.order.push(id.clone());
        store.definitions.insert(id, record);

        info!(kind = %kind, definition_id = %summary.id, "Created definition");
        summary
    }

    /// Append a version to an existing definition
    pub fn create_definition_version(
        &self,
        kind: DefinitionKind,
        definition_id: &str,
        payload: serde_json::Value,
    ) -> GreengrassResult<DefinitionVersionSummary> {
        let now = self.clock.now();
        let mut store = self.store(kind).write();
        let record = store.definitions.get_mut(definition_id).ok_or_else(|| {
            GreengrassError::IdNotFound(kind.version_target_not_found_message().to_string())
        })?;

        let version = self.append_version(kind, record, payload, now);
        info!(
            kind = %kind,
            definition_id,
            version_id = %version.version,
            "Created definition version"
        );
        Ok(version)
    }

    fn append_version(
        &self,
        kind: DefinitionKind,
        record: &mut DefinitionRecord,
        payload: serde_json::Value,
        now: Timestamp,
    ) -> DefinitionVersionSummary {
        let version_id = Uuid::now_v7().to_string();
        let arn = DefinitionVersionArn::new(&self.config, kind, record.id.clone(), version_id.clone());
        let summary = DefinitionVersionSummary {
            arn: arn.to_string(),
            creation_timestamp: now,
            id: record.id.clone(),
            version: version_id,
        };
        record.versions.push(DefinitionVersionRecord { arn, payload });
        record.updated = now;
        summary
    }

    /// Read a definition
    pub fn get_definition(
        &self,
        kind: DefinitionKind,
        definition_id: &str,
    ) -> GreengrassResult<DefinitionSummary> {
        self.store(kind)
            .read()
            .definitions
            .get(definition_id)
            .map(DefinitionRecord::summary)
            .ok_or_else(|| GreengrassError::IdNotFound(kind.definition_not_found_message().to_string()))
    }

    /// Payload stored for a definition version, exactly as supplied
    pub fn definition_version_payload(
        &self,
        kind: DefinitionKind,
        definition_id: &str,
        version_id: &str,
    ) -> Option<serde_json::Value> {
        let store = self.store(kind).read();
        store
            .definitions
            .get(definition_id)?
            .versions
            .iter()
            .find(|v| v.version_id() == version_id)
            .map(|v| v.payload.clone())
    }

    /// All definitions of a kind in creation order
    pub fn list_definitions(&self, kind: DefinitionKind) -> Vec<DefinitionSummary> {
        let store = self.store(kind).read();
        store
            .order
            .iter()
            .filter_map(|id| store.definitions.get(id))
            .map(DefinitionRecord::summary)
            .collect()
    }
}

impl DefinitionRegistry for InMemoryDefinitionRegistry {
    fn exists(&self, kind: DefinitionKind, definition_id: &str, version_id: &str) -> bool {
        let found = self
            .store(kind)
            .read()
            .definitions
            .get(definition_id)
            .is_some_and(|record| record.has_version(version_id));
        debug!(kind = %kind, definition_id, version_id, found, "Definition version lookup");
        found
    }

    fn find_definition_for_version(
        &self,
        kind: DefinitionKind,
        version_id: &str,
    ) -> Option<String> {
        let store = self.store(kind).read();
        let owner = store
            .order
            .iter()
            .filter_map(|id| store.definitions.get(id))
            .find(|record| record.has_version(version_id))
            .map(|record| record.id.clone());
        debug!(kind = %kind, version_id, owner = ?owner, "Bare version lookup");
        owner
    }
}
