//! Status-predicate driven bulk operations.
//!
//! [`FilteredAssetsPipeline`] reduces the asset sets handed to `add` and
//! `commit` to the paths whose current status actually makes them meaningful
//! targets, per the policy table on [`FileStatus`]. Requesting "add these
//! fifty paths" quietly drops the ones that are already tracked, missing from
//! disk, or otherwise not addable, then forwards the rest down the chain.
//! An empty reduced set is a successful no-op.
//!
//! Paths with no status record at all (unknown) are excluded: the pipeline
//! only acts on state it can verify.

use crate::commands::interface::{
    ConflictResolution, OperationMode, StatusLevel, VersionControlCommands,
};
use crate::core::interned_path::InternedPath;
use crate::core::status::{FileStatus, VersionControlStatus};

/// Decorator reducing bulk add/commit requests to qualifying assets.
pub struct FilteredAssetsPipeline<C> {
    inner: C,
}

impl<C: VersionControlCommands> FilteredAssetsPipeline<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    fn retain_by_policy(
        &self,
        assets: &[InternedPath],
        qualifies: impl Fn(FileStatus) -> bool,
    ) -> Vec<InternedPath> {
        assets
            .iter()
            .filter(|path| {
                self.inner
                    .get_asset_status(path)
                    .map(|status| qualifies(status.file_status))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

impl<C: VersionControlCommands> VersionControlCommands for FilteredAssetsPipeline<C> {
    fn request_status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        self.inner.request_status(assets, level)
    }

    fn status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        self.inner.status(assets, level)
    }

    fn update(&self, assets: Option<&[InternedPath]>) -> bool {
        self.inner.update(assets)
    }

    fn commit(&self, assets: &[InternedPath], message: &str) -> bool {
        let committable = self.retain_by_policy(assets, |status| status.is_commit_candidate());
        if committable.is_empty() {
            log::debug!("commit: no qualifying assets out of {}", assets.len());
            return true;
        }
        self.inner.commit(&committable, message)
    }

    fn add(&self, assets: &[InternedPath]) -> bool {
        let addable = self.retain_by_policy(assets, |status| status.is_add_candidate());
        if addable.is_empty() {
            log::debug!("add: no qualifying assets out of {}", assets.len());
            return true;
        }
        self.inner.add(&addable)
    }

    fn revert(&self, assets: &[InternedPath]) -> bool {
        self.inner.revert(assets)
    }

    fn delete(&self, assets: &[InternedPath], mode: OperationMode) -> bool {
        self.inner.delete(assets, mode)
    }

    fn move_asset(&self, from: &InternedPath, to: &InternedPath) -> bool {
        self.inner.move_asset(from, to)
    }

    fn resolve(&self, assets: &[InternedPath], resolution: ConflictResolution) -> bool {
        self.inner.resolve(assets, resolution)
    }

    fn get_asset_status(&self, asset: &InternedPath) -> Option<VersionControlStatus> {
        self.inner.get_asset_status(asset)
    }

    fn get_filtered_assets(
        &self,
        filter: &dyn Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus> {
        self.inner.get_filtered_assets(filter)
    }

    fn remove_from_database(&self, assets: &[InternedPath]) {
        self.inner.remove_from_database(assets)
    }
}
