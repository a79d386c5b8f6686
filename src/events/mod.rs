// Copyright (c) 2025 - Cowboy AI, Inc.
//! Greengrass Domain Events
//!
//! Immutable facts representing committed state changes.
//!
//! ```text
//! Command → Handler → Event → apply_event → State
//!   (intent)  (validate)  (fact)             (new group state)
//! ```
//!
//! A rejected command yields no event, so nothing is ever applied for it.

pub mod group;

pub use group::{GroupCreated, GroupEvent, GroupVersionCreated};
