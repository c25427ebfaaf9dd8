//! Companion-file handling for the command chain.
//!
//! Every tracked asset under the designated root folder may have exactly one
//! companion file: its own path with a fixed suffix appended (`".meta"` by
//! default). Callers reason purely in terms of primary asset paths; this
//! decorator keeps companions in sync transparently. It adds companion paths
//! on outgoing commands and removes companion records from filtered status
//! views.
//!
//! The inbound and outbound transforms are inverses: what
//! [`with_companions`](CompanionFileDecorator::with_companions) adds on the
//! way in, [`get_filtered_assets`](VersionControlCommands::get_filtered_assets)
//! strips on the way out.

use crate::commands::interface::{
    ConflictResolution, OperationMode, StatusLevel, VersionControlCommands,
};
use crate::core::error::Result;
use crate::core::interned_path::InternedPath;
use crate::core::settings::CompanionSettings;
use crate::core::status::VersionControlStatus;
use std::collections::HashSet;

/// Decorator that mirrors every operation onto companion files.
pub struct CompanionFileDecorator<C> {
    inner: C,
    settings: CompanionSettings,
}

impl<C: VersionControlCommands> CompanionFileDecorator<C> {
    /// Wrap `inner`, mirroring operations per `settings`. Fails if the
    /// settings are unusable (empty suffix) — a setup error, not a runtime
    /// condition.
    pub fn new(inner: C, settings: CompanionSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { inner, settings })
    }

    /// Wrap `inner` with the default `".meta"` / `"Assets/"` convention.
    pub fn with_defaults(inner: C) -> Self {
        Self {
            inner,
            settings: CompanionSettings::default(),
        }
    }

    pub fn settings(&self) -> &CompanionSettings {
        &self.settings
    }

    fn is_companion(&self, path: &InternedPath) -> bool {
        path.ends_with(&self.settings.suffix)
    }

    fn under_root(&self, path: &InternedPath) -> bool {
        path.as_str().starts_with(&self.settings.root)
    }

    /// The inbound transform: union the input with the synthesized companion
    /// of every primary path under the root, dedupe, and order by increasing
    /// string length so primaries come before their companions.
    ///
    /// An empty input passes through unchanged. A path already carrying the
    /// suffix never gains a second one, and a path outside the root never
    /// gets a companion (it still passes through itself).
    pub fn with_companions(&self, assets: &[InternedPath]) -> Vec<InternedPath> {
        if assets.is_empty() {
            return Vec::new();
        }
        let mut combined = Vec::with_capacity(assets.len() * 2);
        for path in assets {
            if !self.is_companion(path) && self.under_root(path) {
                combined.push(path.concat(&self.settings.suffix));
            }
        }
        combined.extend_from_slice(assets);

        let mut seen = HashSet::with_capacity(combined.len());
        combined.retain(|path| seen.insert(path.clone()));
        // Stable sort: primaries are strictly shorter than their companions,
        // so order-sensitive operations see the primary first.
        combined.sort_by_key(InternedPath::len);
        combined
    }

    /// Optional-set variant preserving the `None` = "all assets" sentinel.
    fn with_companions_opt(&self, assets: Option<&[InternedPath]>) -> Option<Vec<InternedPath>> {
        assets.map(|assets| self.with_companions(assets))
    }

    /// Companion-status lookup: for a primary asset, fetch its companion's
    /// record from the live chain; a record that is already a companion is
    /// its own answer.
    pub fn companion_status(
        &self,
        status: &VersionControlStatus,
    ) -> Option<VersionControlStatus> {
        if self.is_companion(&status.asset_path) {
            Some(status.clone())
        } else {
            self.inner
                .get_asset_status(&status.asset_path.concat(&self.settings.suffix))
        }
    }
}

impl<C: VersionControlCommands> VersionControlCommands for CompanionFileDecorator<C> {
    fn request_status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        let expanded = self.with_companions_opt(assets);
        self.inner.request_status(expanded.as_deref(), level)
    }

    fn status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool {
        let expanded = self.with_companions_opt(assets);
        self.inner.status(expanded.as_deref(), level)
    }

    fn update(&self, assets: Option<&[InternedPath]>) -> bool {
        let expanded = self.with_companions_opt(assets);
        self.inner.update(expanded.as_deref())
    }

    fn commit(&self, assets: &[InternedPath], message: &str) -> bool {
        self.inner.commit(&self.with_companions(assets), message)
    }

    fn add(&self, assets: &[InternedPath]) -> bool {
        self.inner.add(&self.with_companions(assets))
    }

    fn revert(&self, assets: &[InternedPath]) -> bool {
        self.inner.revert(&self.with_companions(assets))
    }

    fn delete(&self, assets: &[InternedPath], mode: OperationMode) -> bool {
        self.inner.delete(&self.with_companions(assets), mode)
    }

    /// Primary move first, companion move second. A companion failure after a
    /// successful primary move is overall failure; the primary move has
    /// already taken effect and is not rolled back.
    fn move_asset(&self, from: &InternedPath, to: &InternedPath) -> bool {
        if !self.inner.move_asset(from, to) {
            return false;
        }
        // A companion path moves alone; outside the root the convention does
        // not apply. Guarding here also keeps a second suffix from ever being
        // stacked onto an already-suffixed path.
        if self.is_companion(from) || !self.under_root(from) {
            return true;
        }
        let companion_moved = self.inner.move_asset(
            &from.concat(&self.settings.suffix),
            &to.concat(&self.settings.suffix),
        );
        if !companion_moved {
            log::warn!(
                "companion move failed after primary move {} -> {}: working copy left partially moved",
                from,
                to
            );
        }
        companion_moved
    }

    fn resolve(&self, assets: &[InternedPath], resolution: ConflictResolution) -> bool {
        self.inner.resolve(&self.with_companions(assets), resolution)
    }

    fn get_asset_status(&self, asset: &InternedPath) -> Option<VersionControlStatus> {
        self.inner.get_asset_status(asset)
    }

    /// Outbound transform: callers of this decorator never see companion
    /// records directly.
    fn get_filtered_assets(
        &self,
        filter: &dyn Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus> {
        let mut records = self.inner.get_filtered_assets(filter);
        records.retain(|status| !self.is_companion(&status.asset_path));
        records
    }

    fn remove_from_database(&self, assets: &[InternedPath]) {
        self.inner.remove_from_database(&self.with_companions(assets))
    }
}
