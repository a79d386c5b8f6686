//! Greengrass group control plane for offline testing
//!
//! Emulates the group half of an IoT-orchestration service: groups are
//! created, versioned and inspected, and every new version is checked for
//! referential integrity against the core, device, function, resource and
//! subscription definition stores before it becomes visible.

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod state_machine;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GreengrassConfig;
pub use domain::{DefinitionKind, DefinitionReferences, Timestamp};
pub use errors::{ErrorBody, GreengrassError, GreengrassResult};
pub use registry::{DefinitionRegistry, InMemoryDefinitionRegistry};
pub use service::{GreengrassBackend, GroupStore};
