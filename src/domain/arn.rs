// Copyright (c) 2025 - Cowboy AI, Inc.
//! Greengrass ARN Locators
//!
//! Grammar for definition version locators:
//!
//! ```text
//! arn:<partition>:greengrass:<region>:<account>:/greengrass/definition/<kind>/<definition-id>/versions/<version-id>
//! ```
//!
//! Parsing yields a typed [`DefinitionVersionArn`]; the builders at the bottom
//! of the module produce every ARN the emulator hands out, so anything it
//! generates parses back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::GreengrassConfig;
use crate::domain::DefinitionKind;

const SERVICE: &str = "greengrass";
const DEFINITION_PATH: &str = "/greengrass/definition/";

/// Locator parse failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArnError {
    #[error("Locator does not start with 'arn:'")]
    MissingPrefix,

    #[error("Locator has too few ':' separated fields")]
    Truncated,

    #[error("Locator belongs to service '{0}', expected 'greengrass'")]
    WrongService(String),

    #[error("Locator field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Locator resource is not a definition version path: {0}")]
    InvalidResourcePath(String),

    #[error("Unknown definition kind segment: {0}")]
    UnknownKind(String),
}

/// Parsed definition version locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitionVersionArn {
    partition: String,
    region: String,
    account_id: String,
    kind: DefinitionKind,
    definition_id: String,
    version_id: String,
}

impl DefinitionVersionArn {
    /// Build the locator for a definition version in the configured account
    pub fn new(
        config: &GreengrassConfig,
        kind: DefinitionKind,
        definition_id: impl Into<String>,
        version_id: impl Into<String>,
    ) -> Self {
        Self {
            partition: config.partition.clone(),
            region: config.region.clone(),
            account_id: config.account_id.clone(),
            kind,
            definition_id: definition_id.into(),
            version_id: version_id.into(),
        }
    }

    /// Parse a locator string
    ///
    /// # Invariants
    /// - Prefix `arn:` and service `greengrass`
    /// - Non-empty partition, region and account
    /// - Resource path is exactly `/greengrass/definition/<kind>/<id>/versions/<version>`
    /// - Known kind segment, non-empty ids
    pub fn parse(raw: &str) -> Result<Self, ArnError> {
        let rest = raw.strip_prefix("arn:").ok_or(ArnError::MissingPrefix)?;

        // The resource path may itself contain ':' so only split the header
        let mut fields = rest.splitn(5, ':');
        let partition = fields.next().ok_or(ArnError::Truncated)?;
        let service = fields.next().ok_or(ArnError::Truncated)?;
        let region = fields.next().ok_or(ArnError::Truncated)?;
        let account_id = fields.next().ok_or(ArnError::Truncated)?;
        let resource = fields.next().ok_or(ArnError::Truncated)?;

        if service != SERVICE {
            return Err(ArnError::WrongService(service.to_string()));
        }
        for (name, value) in [
            ("partition", partition),
            ("region", region),
            ("account", account_id),
        ] {
            if value.is_empty() {
                return Err(ArnError::EmptyField(name));
            }
        }

        let path = resource
            .strip_prefix(DEFINITION_PATH)
            .ok_or_else(|| ArnError::InvalidResourcePath(resource.to_string()))?;

        let segments: Vec<&str> = path.split('/').collect();
        let [segment, definition_id, versions, version_id] = segments.as_slice() else {
            return Err(ArnError::InvalidResourcePath(resource.to_string()));
        };
        if *versions != "versions" {
            return Err(ArnError::InvalidResourcePath(resource.to_string()));
        }
        let kind = DefinitionKind::from_segment(segment)
            .ok_or_else(|| ArnError::UnknownKind(segment.to_string()))?;
        if definition_id.is_empty() {
            return Err(ArnError::EmptyField("definition id"));
        }
        if version_id.is_empty() {
            return Err(ArnError::EmptyField("version id"));
        }

        Ok(Self {
            partition: partition.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            kind,
            definition_id: definition_id.to_string(),
            version_id: version_id.to_string(),
        })
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl fmt::Display for DefinitionVersionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}{}/{}/versions/{}",
            self.partition,
            SERVICE,
            self.region,
            self.account_id,
            DEFINITION_PATH,
            self.kind.segment(),
            self.definition_id,
            self.version_id
        )
    }
}

impl std::str::FromStr for DefinitionVersionArn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// ARN of a definition
pub fn definition_arn(config: &GreengrassConfig, kind: DefinitionKind, definition_id: &str) -> String {
    format!(
        "{}{}{}/{}",
        config.arn_prefix(),
        DEFINITION_PATH,
        kind.segment(),
        definition_id
    )
}

/// ARN of a group
pub fn group_arn(config: &GreengrassConfig, group_id: &str) -> String {
    format!("{}/greengrass/groups/{}", config.arn_prefix(), group_id)
}

/// ARN of a group version
pub fn group_version_arn(config: &GreengrassConfig, group_id: &str, version: &str) -> String {
    format!("{}/versions/{}", group_arn(config, group_id), version)
}
