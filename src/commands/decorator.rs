//! Neutral chain link: forwards every operation to its inner implementation.
//!
//! A chain is built by nesting same-interface wrappers, each exclusively
//! owning exactly one inner implementation and terminating at the
//! backend-facing one. [`Decorator`] is the identity link — it forwards every
//! call verbatim and returns the result unchanged. Concrete decorators follow
//! the same shape and override only the operations they need to alter.
//!
//! Chains are composed once at startup; links are not added or removed at
//! runtime.

use crate::commands::interface::{
    ConflictResolution, OperationMode, StatusLevel, VersionControlCommands,
};
use crate::core::interned_path::InternedPath;
use crate::core::status::VersionControlStatus;

/// Identity decorator wrapping one inner [`VersionControlCommands`].
#[derive(Debug)]
pub struct Decorator<C> {
    inner: C,
}

impl<C: VersionControlCommands> Decorator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped implementation.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the chain link.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: VersionControlCommands> VersionControlCommands for Decorator<C> {
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
        self.inner.commit(assets, message)
    }

    fn add(&self, assets: &[InternedPath]) -> bool {
        self.inner.add(assets)
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
