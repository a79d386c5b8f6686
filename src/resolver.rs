// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reference Resolver
//!
//! Turns caller-supplied reference strings into checked
//! `(kind, definition-id, version-id)` triples.
//!
//! # Accepted Shapes
//!
//! ```text
//! <version-id>                                   bare token, owner looked up
//! arn:...:/greengrass/definition/<kind>/<id>/versions/<version-id>
//! ```
//!
//! Anything starting with `arn:` must parse as a locator; anything else must
//! be a plain token. Malformed input and dangling references fail with the
//! same per-kind reason, so callers cannot tell them apart.
//!
//! Resolution is a pure lookup against the injected [`DefinitionRegistry`].

use thiserror::Error;
use tracing::debug;

use crate::domain::{ArnError, DefinitionKind, DefinitionReferences, DefinitionVersionArn};
use crate::registry::DefinitionRegistry;

/// Why a reference did not resolve (internal detail, never shown to callers)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceFailure {
    #[error("malformed locator: {0}")]
    MalformedLocator(#[from] ArnError),

    #[error("malformed token: {0:?}")]
    MalformedToken(String),

    #[error("locator names kind '{found}'")]
    KindMismatch { found: DefinitionKind },

    #[error("no such definition version")]
    Dangling,
}

/// Reference resolution failure for one kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .kind.missing_reference_reason())]
pub struct ReferenceError {
    pub kind: DefinitionKind,
    pub failure: ReferenceFailure,
}

impl ReferenceError {
    pub fn new(kind: DefinitionKind, failure: ReferenceFailure) -> Self {
        Self { kind, failure }
    }

    /// Dangling reference of the given kind
    pub fn missing(kind: DefinitionKind) -> Self {
        Self::new(kind, ReferenceFailure::Dangling)
    }

    /// Externally visible reason
    pub fn reason(&self) -> &'static str {
        self.kind.missing_reference_reason()
    }
}

/// Syntactic shape of a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    /// Opaque version id, owner unknown
    BareVersion(String),
    /// Fully-qualified locator
    Locator(DefinitionVersionArn),
}

impl ParsedReference {
    /// Classify and parse a reference string
    pub fn parse(raw: &str) -> Result<Self, ReferenceFailure> {
        if raw.starts_with("arn:") {
            return Ok(Self::Locator(DefinitionVersionArn::parse(raw)?));
        }
        let plain = !raw.is_empty()
            && !raw
                .chars()
                .any(|c| c == ':' || c == '/' || c.is_whitespace());
        if !plain {
            return Err(ReferenceFailure::MalformedToken(raw.to_string()));
        }
        Ok(Self::BareVersion(raw.to_string()))
    }
}

/// Reference that passed resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    pub kind: DefinitionKind,
    pub definition_id: String,
    pub version_id: String,
}

/// Validates references against a definition registry
pub struct ReferenceResolver<'a> {
    registry: &'a dyn DefinitionRegistry,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(registry: &'a dyn DefinitionRegistry) -> Self {
        Self { registry }
    }

    /// Resolve one reference of the expected kind
    pub fn resolve(
        &self,
        kind: DefinitionKind,
        raw: &str,
    ) -> Result<ResolvedReference, ReferenceError> {
        let result = self.try_resolve(kind, raw);
        if let Err(failure) = &result {
            debug!(kind = %kind, reference = raw, %failure, "Reference did not resolve");
        }
        result.map_err(|failure| ReferenceError::new(kind, failure))
    }

    fn try_resolve(
        &self,
        kind: DefinitionKind,
        raw: &str,
    ) -> Result<ResolvedReference, ReferenceFailure> {
        match ParsedReference::parse(raw)? {
            ParsedReference::BareVersion(version_id) => {
                let definition_id = self
                    .registry
                    .find_definition_for_version(kind, &version_id)
                    .ok_or(ReferenceFailure::Dangling)?;
                Ok(ResolvedReference {
                    kind,
                    definition_id,
                    version_id,
                })
            }
            ParsedReference::Locator(arn) => {
                if arn.kind() != kind {
                    return Err(ReferenceFailure::KindMismatch { found: arn.kind() });
                }
                if !self
                    .registry
                    .exists(kind, arn.definition_id(), arn.version_id())
                {
                    return Err(ReferenceFailure::Dangling);
                }
                Ok(ResolvedReference {
                    kind,
                    definition_id: arn.definition_id().to_string(),
                    version_id: arn.version_id().to_string(),
                })
            }
        }
    }

    /// Resolve every supplied reference in declaration order
    ///
    /// Stops at the first failure; later references are not examined.
    pub fn resolve_all(
        &self,
        references: &DefinitionReferences,
    ) -> Result<Vec<ResolvedReference>, ReferenceError> {
        references
            .iter()
            .map(|(kind, raw)| self.resolve(kind, raw))
            .collect()
    }
}
