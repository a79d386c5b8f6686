// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error taxonomy for the Greengrass control plane
//!
//! Every failure leaving the crate is a [`GreengrassError`]. The API front-end
//! only needs [`GreengrassError::code`] and [`GreengrassError::message`] (or the
//! serializable [`ErrorBody`]) to reproduce the service's wire errors.
//!
//! # Codes
//!
//! | Variant | Code |
//! |---|---|
//! | [`GreengrassError::IdNotFound`] | `IdNotFoundException` |
//! | [`GreengrassError::VersionNotFound`] | `VersionNotFoundException` |
//! | [`GreengrassError::InvalidGroup`] | `400` |
//! | [`GreengrassError::InvalidInput`] | `InvalidInputException` |

use serde::Serialize;
use thiserror::Error;

use crate::aggregate::CommandError;
use crate::resolver::ReferenceError;

/// Message returned whenever a group id is unknown
pub const GROUP_NOT_FOUND_MESSAGE: &str = "That group does not exist.";

/// Errors surfaced by control-plane operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreengrassError {
    /// Target resource (group or definition) does not exist
    #[error("{0}")]
    IdNotFound(String),

    /// Group exists but the requested version does not
    #[error("Version {version} of Group Definition {group_id} does not exist.")]
    VersionNotFound { group_id: String, version: String },

    /// A supplied definition reference is malformed or dangling
    #[error("The group is invalid or corrupted. (ErrorDetails: [{0}])")]
    InvalidGroup(String),

    /// Request payload is unusable
    #[error("{0}")]
    InvalidInput(String),
}

/// Result type for control-plane operations
pub type GreengrassResult<T> = Result<T, GreengrassError>;

impl GreengrassError {
    /// Error for an unknown group id
    pub fn group_not_found() -> Self {
        GreengrassError::IdNotFound(GROUP_NOT_FOUND_MESSAGE.to_string())
    }

    /// Externally visible error code
    pub fn code(&self) -> &'static str {
        match self {
            GreengrassError::IdNotFound(_) => "IdNotFoundException",
            GreengrassError::VersionNotFound { .. } => "VersionNotFoundException",
            GreengrassError::InvalidGroup(_) => "400",
            GreengrassError::InvalidInput(_) => "InvalidInputException",
        }
    }

    /// Externally visible message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Wire representation
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.message(),
        }
    }
}

/// `{code, message}` pair handed to the API front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<ReferenceError> for GreengrassError {
    fn from(err: ReferenceError) -> Self {
        GreengrassError::InvalidGroup(err.reason().to_string())
    }
}

impl From<CommandError> for GreengrassError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::GroupNotFound => GreengrassError::group_not_found(),
            CommandError::InvalidReference(reference) => reference.into(),
            CommandError::MissingName => {
                GreengrassError::InvalidInput("Input does not contain a name.".to_string())
            }
            CommandError::GroupAlreadyExists(id) => {
                GreengrassError::InvalidInput(format!("Group {} already exists.", id))
            }
        }
    }
}
