//! Core building blocks for the version-control abstraction layer.
//!
//! This module provides the leaf types the command chain is built from:
//! interned paths, status records, the shared status database, and the
//! companion-file settings.

pub mod database;
pub mod error;
pub mod interned_path;
pub mod settings;
pub mod status;

// === Error handling ===
// Core error types and result type used throughout the crate
pub use error::{Result, VersionControlError};

// === Interned paths ===
// Canonicalized path strings with O(1) equality and cheap suffix operations
pub use interned_path::InternedPath;

// === Status types ===
// Type-safe status vocabulary and the per-path status record
pub use status::{FileStatus, ReflectionLevel, VersionControlStatus};

// === Status database ===
// The authoritative asset-path-to-status map shared across the chain
pub use database::{SharedDatabase, StatusDatabase};

// === Settings ===
// Configurable companion-file convention (suffix + designated root)
pub use settings::CompanionSettings;
