//! Terminal, backend-facing implementation of the command chain.
//!
//! [`BackendCommands`] is the end of every chain and the sole writer of the
//! shared [`StatusDatabase`](crate::core::StatusDatabase). Synchronous
//! operations call the [`RawStatusProvider`] inline and fold the fresh status
//! records into the database before returning, so status changes an operation
//! caused are visible to any read that happens after it. `request_status` is
//! the one asynchronous operation: jobs go to a single background worker and
//! the database update lands when the provider answers.
//!
//! Provider errors never escape as errors; they are logged and surfaced as
//! `false` results per the chain contract.

use crate::commands::interface::{
    ConflictResolution, OperationMode, OperationRequest, RawStatusProvider, StatusLevel,
    VersionControlCommands,
};
use crate::core::database::SharedDatabase;
use crate::core::interned_path::InternedPath;
use crate::core::status::VersionControlStatus;
use parking_lot::Mutex;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

struct StatusJob {
    assets: Option<Vec<InternedPath>>,
    level: StatusLevel,
}

/// Terminal command implementation over a [`RawStatusProvider`].
pub struct BackendCommands<P> {
    provider: Arc<P>,
    database: SharedDatabase,
    sender: Mutex<Option<mpsc::Sender<StatusJob>>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl<P: RawStatusProvider + 'static> BackendCommands<P> {
    pub fn new(provider: P, database: SharedDatabase) -> Self {
        let provider = Arc::new(provider);
        let (sender, receiver) = mpsc::channel::<StatusJob>();

        let worker_provider = Arc::clone(&provider);
        let worker_database = Arc::clone(&database);
        let worker = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                match worker_provider.run_status(job.assets.as_deref(), job.level) {
                    Ok(records) => worker_database.set_all(records),
                    Err(e) => log::warn!("background status refresh failed: {e}"),
                }
            }
        });

        Self {
            provider,
            database,
            sender: Mutex::new(Some(sender)),
            worker: Some(worker),
        }
    }

    pub fn database(&self) -> &SharedDatabase {
        &self.database
    }

    /// Run one mutating operation and, on success, refresh status for the
    /// touched assets so the database reflects the effect before returning.
    fn run_and_refresh(
        &self,
        request: OperationRequest<'_>,
        touched: Option<&[InternedPath]>,
    ) -> bool {
        let name = request.name();
        match self.provider.run_operation(request) {
            Ok(true) => {
                if !self.status(touched, StatusLevel::Local) {
                    log::warn!("{name} succeeded but the follow-up status refresh failed");
                }
                true
            }
            Ok(false) => {
                log::debug!("{name}: backend reported failure");
                false
            }
            Err(e) => {
                log::warn!("{name} failed: {e}");
                false
            }
        }
    }
}

impl<P: RawStatusProvider + 'static> VersionControlCommands for BackendCommands<P> {
    fn request_status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        let job = StatusJob {
            assets: assets.map(|a| a.to_vec()),
            level,
        };
        match self.sender.lock().as_ref() {
            Some(sender) => sender.send(job).is_ok(),
            None => false,
        }
    }

    fn status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        match self.provider.run_status(assets, level) {
            Ok(records) => {
                self.database.set_all(records);
                true
            }
            Err(e) => {
                log::warn!("status refresh failed: {e}");
                false
            }
        }
    }

    fn update(&self, assets: Option<&[InternedPath]>) -> bool {
        self.run_and_refresh(OperationRequest::Update { assets }, assets)
    }

    fn commit(&self, assets: &[InternedPath], message: &str) -> bool {
        if assets.is_empty() {
            return true;
        }
        self.run_and_refresh(OperationRequest::Commit { assets, message }, Some(assets))
    }

    fn add(&self, assets: &[InternedPath]) -> bool {
        if assets.is_empty() {
            return true;
        }
        self.run_and_refresh(OperationRequest::Add { assets }, Some(assets))
    }

    fn revert(&self, assets: &[InternedPath]) -> bool {
        if assets.is_empty() {
            return true;
        }
        self.run_and_refresh(OperationRequest::Revert { assets }, Some(assets))
    }

    fn delete(&self, assets: &[InternedPath], mode: OperationMode) -> bool {
        if assets.is_empty() {
            return true;
        }
        self.run_and_refresh(OperationRequest::Delete { assets, mode }, Some(assets))
    }

    fn move_asset(&self, from: &InternedPath, to: &InternedPath) -> bool {
        let touched = [from.clone(), to.clone()];
        self.run_and_refresh(OperationRequest::Move { from, to }, Some(&touched))
    }

    fn resolve(&self, assets: &[InternedPath], resolution: ConflictResolution) -> bool {
        if assets.is_empty() {
            return true;
        }
        self.run_and_refresh(OperationRequest::Resolve { assets, resolution }, Some(assets))
    }

    fn get_asset_status(&self, asset: &InternedPath) -> Option<VersionControlStatus> {
        self.database.get(asset)
    }

    fn get_filtered_assets(
        &self,
        filter: &dyn Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus> {
        self.database.filtered(|status| filter(status))
    }

    fn remove_from_database(&self, assets: &[InternedPath]) {
        self.database.remove(assets);
    }
}

impl<P> Drop for BackendCommands<P> {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain pending jobs and exit.
        self.sender.lock().take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
