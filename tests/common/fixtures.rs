//! Test data generation utilities and predefined scenarios
//!
//! Provides seeded status databases, loopback chain components, and a
//! scripted backend provider for exercising full chains.

#![allow(dead_code)]

use asset_vcs::{
    DataCarrier, FileStatus, InternedPath, LoopbackCommands, OperationRequest, RawStatusProvider,
    Result, SharedDatabase, StatusDatabase, StatusLevel, VersionControlStatus,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn paths(raw: &[&str]) -> Vec<InternedPath> {
    raw.iter().map(InternedPath::new).collect()
}

/// Scenario: database with one asset in each of the five classic states.
/// Paths are simply named after their status.
pub fn five_status_database() -> SharedDatabase {
    let db = Arc::new(StatusDatabase::new());
    db.set(VersionControlStatus::local("missing", FileStatus::Missing));
    db.set(VersionControlStatus::local(
        "unversioned",
        FileStatus::Unversioned,
    ));
    db.set(VersionControlStatus::local("normal", FileStatus::Normal));
    db.set(VersionControlStatus::local("deleted", FileStatus::Deleted));
    db.set(VersionControlStatus::local("added", FileStatus::Added));
    db
}

/// A loopback terminal over the given database plus its shared carrier.
pub fn loopback(database: SharedDatabase) -> (Arc<DataCarrier>, LoopbackCommands) {
    let carrier = Arc::new(DataCarrier::default());
    let commands = LoopbackCommands::new(Arc::clone(&carrier), database);
    (carrier, commands)
}

/// Backend provider scripted from a path-to-status map. Records every status
/// scope and operation it receives so chain transformations are observable.
pub struct ScriptedProvider {
    statuses: HashMap<InternedPath, FileStatus>,
    status_scopes: Mutex<Vec<Option<Vec<InternedPath>>>>,
    operations: Mutex<Vec<String>>,
    operation_assets: Mutex<Vec<InternedPath>>,
    messages: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(statuses: &[(&str, FileStatus)]) -> Self {
        Self {
            statuses: statuses
                .iter()
                .map(|(path, status)| (InternedPath::new(path), *status))
                .collect(),
            status_scopes: Mutex::new(Vec::new()),
            operations: Mutex::new(Vec::new()),
            operation_assets: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn status_scopes(&self) -> Vec<Option<Vec<InternedPath>>> {
        self.status_scopes.lock().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().clone()
    }

    pub fn operation_assets(&self) -> Vec<InternedPath> {
        self.operation_assets.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    fn record_for(&self, path: &InternedPath) -> VersionControlStatus {
        let status = self
            .statuses
            .get(path)
            .copied()
            .unwrap_or(FileStatus::Normal);
        VersionControlStatus::local(path.clone(), status)
    }
}

impl RawStatusProvider for ScriptedProvider {
    fn run_status(
        &self,
        assets: Option<&[InternedPath]>,
        _level: StatusLevel,
    ) -> Result<Vec<VersionControlStatus>> {
        self.status_scopes.lock().push(assets.map(|a| a.to_vec()));
        let records = match assets {
            Some(assets) => assets.iter().map(|path| self.record_for(path)).collect(),
            None => self
                .statuses
                .keys()
                .map(|path| self.record_for(path))
                .collect(),
        };
        Ok(records)
    }

    fn run_operation(&self, request: OperationRequest<'_>) -> Result<bool> {
        self.operations.lock().push(request.name().to_string());
        let mut recorded = self.operation_assets.lock();
        match request {
            OperationRequest::Update { assets } => {
                if let Some(assets) = assets {
                    recorded.extend_from_slice(assets);
                }
            }
            OperationRequest::Commit { assets, message } => {
                self.messages.lock().push(message.to_string());
                recorded.extend_from_slice(assets);
            }
            OperationRequest::Add { assets }
            | OperationRequest::Revert { assets }
            | OperationRequest::Delete { assets, .. }
            | OperationRequest::Resolve { assets, .. } => {
                recorded.extend_from_slice(assets);
            }
            OperationRequest::Move { from, to } => {
                recorded.push(from.clone());
                recorded.push(to.clone());
            }
        }
        Ok(true)
    }
}
