//! Recording terminal implementation for tests and automation stubs.
//!
//! [`LoopbackCommands`] sits at the end of a chain in place of a real
//! backend: it answers reads from a seeded [`StatusDatabase`], records every
//! asset set it receives into a shared [`DataCarrier`], and reports success
//! for everything — except paths registered via
//! [`fail_on`](LoopbackCommands::fail_on), which make the touching operation
//! return false. This makes the path-set transformations of the decorators
//! above it directly observable.

use crate::commands::interface::{
    ConflictResolution, OperationMode, StatusLevel, VersionControlCommands,
};
use crate::core::database::SharedDatabase;
use crate::core::interned_path::InternedPath;
use crate::core::status::VersionControlStatus;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared recorder of everything a [`LoopbackCommands`] terminal received.
#[derive(Debug, Default)]
pub struct DataCarrier {
    assets: Mutex<Vec<InternedPath>>,
    scopes: Mutex<Vec<Option<Vec<InternedPath>>>>,
    moves: Mutex<Vec<(InternedPath, InternedPath)>>,
}

impl DataCarrier {
    /// Every concrete asset path received, in arrival order.
    pub fn recorded(&self) -> Vec<InternedPath> {
        self.assets.lock().clone()
    }

    /// The optional asset sets received by status/update operations, with the
    /// `None` = "all assets" sentinel preserved.
    pub fn scopes(&self) -> Vec<Option<Vec<InternedPath>>> {
        self.scopes.lock().clone()
    }

    /// Move pairs received, in arrival order.
    pub fn moves(&self) -> Vec<(InternedPath, InternedPath)> {
        self.moves.lock().clone()
    }

    pub fn contains(&self, path: &InternedPath) -> bool {
        self.assets.lock().contains(path)
    }

    pub fn clear(&self) {
        self.assets.lock().clear();
        self.scopes.lock().clear();
        self.moves.lock().clear();
    }

    fn record_assets(&self, assets: &[InternedPath]) {
        self.assets.lock().extend_from_slice(assets);
    }

    fn record_scope(&self, assets: Option<&[InternedPath]>) {
        self.scopes.lock().push(assets.map(|a| a.to_vec()));
        if let Some(assets) = assets {
            self.record_assets(assets);
        }
    }

    fn record_move(&self, from: &InternedPath, to: &InternedPath) {
        self.moves.lock().push((from.clone(), to.clone()));
    }
}

/// Terminal implementation that loops reads back from a seeded database and
/// records writes instead of performing them.
pub struct LoopbackCommands {
    carrier: Arc<DataCarrier>,
    database: SharedDatabase,
    fail_paths: HashSet<InternedPath>,
}

impl LoopbackCommands {
    pub fn new(carrier: Arc<DataCarrier>, database: SharedDatabase) -> Self {
        Self {
            carrier,
            database,
            fail_paths: HashSet::new(),
        }
    }

    /// Register a path whose operations should report backend failure.
    pub fn fail_on(mut self, path: impl Into<InternedPath>) -> Self {
        self.fail_paths.insert(path.into());
        self
    }

    fn succeeds_for(&self, assets: &[InternedPath]) -> bool {
        assets.iter().all(|path| !self.fail_paths.contains(path))
    }
}

impl VersionControlCommands for LoopbackCommands {
    fn request_status(&self, assets: Option<&[InternedPath]>, _level: StatusLevel) -> bool {
        self.carrier.record_scope(assets);
        true
    }

    fn status(&self, assets: Option<&[InternedPath]>, _level: StatusLevel) -> bool {
        self.carrier.record_scope(assets);
        assets.map_or(true, |assets| self.succeeds_for(assets))
    }

    fn update(&self, assets: Option<&[InternedPath]>) -> bool {
        self.carrier.record_scope(assets);
        assets.map_or(true, |assets| self.succeeds_for(assets))
    }

    fn commit(&self, assets: &[InternedPath], _message: &str) -> bool {
        self.carrier.record_assets(assets);
        self.succeeds_for(assets)
    }

    fn add(&self, assets: &[InternedPath]) -> bool {
        self.carrier.record_assets(assets);
        self.succeeds_for(assets)
    }

    fn revert(&self, assets: &[InternedPath]) -> bool {
        self.carrier.record_assets(assets);
        self.succeeds_for(assets)
    }

    fn delete(&self, assets: &[InternedPath], _mode: OperationMode) -> bool {
        self.carrier.record_assets(assets);
        self.succeeds_for(assets)
    }

    fn move_asset(&self, from: &InternedPath, to: &InternedPath) -> bool {
        self.carrier.record_move(from, to);
        !self.fail_paths.contains(from) && !self.fail_paths.contains(to)
    }

    fn resolve(&self, assets: &[InternedPath], _resolution: ConflictResolution) -> bool {
        self.carrier.record_assets(assets);
        self.succeeds_for(assets)
    }

    fn get_asset_status(&self, asset: &InternedPath) -> Option<VersionControlStatus> {
        self.database.get(asset)
    }

    fn get_filtered_assets(
        &self,
        filter: &dyn Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus> {
        self.database.filtered(filter)
    }

    fn remove_from_database(&self, assets: &[InternedPath]) {
        self.carrier.record_assets(assets);
        self.database.remove(assets);
    }
}
