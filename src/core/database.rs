//! Shared status database: the authoritative asset-path-to-status map.
//!
//! One [`StatusDatabase`] instance is shared by reference across the whole
//! command chain; the terminal backend implementation is its sole writer and
//! every decorator reads through it. Absence of a record is a valid state
//! meaning "unknown", distinct from every [`FileStatus`] value.
//!
//! A single coarse lock guards the map as a whole. Record replacement happens
//! under the write lock, so a reader never observes a half-written record.

use crate::core::interned_path::InternedPath;
use crate::core::status::VersionControlStatus;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Handle type for sharing one database across the chain.
pub type SharedDatabase = Arc<StatusDatabase>;

/// Mapping from [`InternedPath`] to [`VersionControlStatus`].
#[derive(Debug, Default)]
pub struct StatusDatabase {
    entries: RwLock<HashMap<InternedPath, VersionControlStatus>>,
}

impl StatusDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for `path`, or `None` meaning "unknown".
    pub fn get(&self, path: &InternedPath) -> Option<VersionControlStatus> {
        self.entries.read().get(path).cloned()
    }

    /// Atomically replace any existing record for the record's path.
    pub fn set(&self, status: VersionControlStatus) {
        log::debug!(
            "status db: {} -> {}",
            status.asset_path,
            status.file_status.description()
        );
        self.entries
            .write()
            .insert(status.asset_path.clone(), status);
    }

    /// Replace records for a whole batch under one lock acquisition.
    pub fn set_all(&self, statuses: impl IntoIterator<Item = VersionControlStatus>) {
        let mut entries = self.entries.write();
        for status in statuses {
            entries.insert(status.asset_path.clone(), status);
        }
    }

    /// Delete records for exactly the given paths; absent entries are no-ops.
    pub fn remove(&self, paths: &[InternedPath]) {
        let mut entries = self.entries.write();
        for path in paths {
            entries.remove(path);
        }
    }

    /// Snapshot of all currently tracked paths.
    pub fn keys(&self) -> Vec<InternedPath> {
        self.entries.read().keys().cloned().collect()
    }

    /// Snapshot of every record for which `predicate` holds.
    ///
    /// The snapshot is taken under one read lock, so a single call never
    /// duplicates or skips an entry; iteration order is unspecified.
    pub fn filtered(
        &self,
        predicate: impl Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus> {
        self.entries
            .read()
            .values()
            .filter(|status| predicate(status))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
