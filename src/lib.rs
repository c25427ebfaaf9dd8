//! Asset VCS - a version-control abstraction layer for large asset trees.
//!
//! This library sits between an asset-management client and an external
//! version-control backend. It tracks the per-file version-control status of
//! an asset tree, lets call sites request operations (add, commit, revert,
//! delete, move, resolve) on sets of file paths, and transparently handles
//! the companion-file convention: each tracked asset may have a paired
//! metadata file that must mirror every operation without callers knowing
//! about it.
//!
//! # Architecture
//! Operations flow through a chain of same-interface decorators down to a
//! terminal implementation that talks to the backend through a
//! [`RawStatusProvider`] and maintains the shared [`StatusDatabase`]:
//!
//! ```text
//! caller -> FilteredAssetsPipeline -> CompanionFileDecorator -> BackendCommands
//!                  |                         |                        |
//!                  +---------- shared StatusDatabase reads -----------+
//! ```
//!
//! # Public API
//! The main public interface is re-exported from the [`mod@core`] and
//! [`commands`] modules:
//! - Interned asset paths and typed status records
//! - The shared status database
//! - The [`VersionControlCommands`] operation surface and decorator chain
//! - Chain composition via [`build_chain`]

pub mod commands;
pub mod core;

// Re-export the public API for external users
pub use crate::core::{
    CompanionSettings,
    FileStatus,
    // Interned paths
    InternedPath,
    ReflectionLevel,
    Result,
    // Status database
    SharedDatabase,
    StatusDatabase,
    // Error handling
    VersionControlError,
    // Status types
    VersionControlStatus,
};

pub use crate::commands::{
    build_chain,
    // Terminals
    BackendCommands,
    // Decorators
    CompanionFileDecorator,
    ConflictResolution,
    DataCarrier,
    Decorator,
    DefaultChain,
    FilteredAssetsPipeline,
    LoopbackCommands,
    OperationMode,
    OperationRequest,
    // Backend capability
    RawStatusProvider,
    StatusLevel,
    // Operation surface
    VersionControlCommands,
};
