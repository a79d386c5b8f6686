// Copyright (c) 2025 - Cowboy AI, Inc.
//! Emulator configuration
//!
//! A single account/region pair stamps every ARN the emulator generates.

use serde::{Deserialize, Serialize};

/// Configuration for ARN generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreengrassConfig {
    /// AWS partition (e.g., "aws", "aws-cn")
    pub partition: String,

    /// Region the emulated service lives in
    pub region: String,

    /// Twelve digit account id
    pub account_id: String,
}

impl GreengrassConfig {
    /// Create a configuration for a region and account
    pub fn new(region: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `GREENGRASS_REGION`, `GREENGRASS_ACCOUNT_ID` and
    /// `GREENGRASS_PARTITION`; unset variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            partition: std::env::var("GREENGRASS_PARTITION").unwrap_or(defaults.partition),
            region: std::env::var("GREENGRASS_REGION").unwrap_or(defaults.region),
            account_id: std::env::var("GREENGRASS_ACCOUNT_ID").unwrap_or(defaults.account_id),
        }
    }

    /// Set the partition
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    /// Common ARN prefix: `arn:<partition>:greengrass:<region>:<account>:`
    pub fn arn_prefix(&self) -> String {
        format!(
            "arn:{}:greengrass:{}:{}:",
            self.partition, self.region, self.account_id
        )
    }
}

impl Default for GreengrassConfig {
    fn default() -> Self {
        Self {
            partition: "aws".to_string(),
            region: "us-east-1".to_string(),
            account_id: "123456789012".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arn_prefix() {
        let config = GreengrassConfig::new("ap-northeast-1", "944137583148");
        assert_eq!(
            config.arn_prefix(),
            "arn:aws:greengrass:ap-northeast-1:944137583148:"
        );
    }

    #[test]
    fn test_partition_override() {
        let config = GreengrassConfig::default().with_partition("aws-cn");
        assert!(config.arn_prefix().starts_with("arn:aws-cn:greengrass:us-east-1:"));
    }
}
