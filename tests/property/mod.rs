// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Version numbering under arbitrary command sequences and reference
//! parsing over arbitrary strings.

mod reference_parsing;
mod version_numbering;
