//! The version-control command surface and its backend capability.
//!
//! [`VersionControlCommands`] is the operation interface the whole system is
//! built around: GUI and automation callers consume it, decorators wrap it,
//! and the terminal implementation realizes it against a backend through
//! [`RawStatusProvider`].
//!
//! # Contract
//! Ordinary backend failures are reported as `false` return values, never as
//! errors crossing the decorator boundary — callers must check results.
//! Errors are confined to the provider seam, where the terminal
//! implementation converts them to boolean results.
//!
//! # The `None` sentinel
//! `request_status`, `status` and `update` accept `Option<&[InternedPath]>`:
//! `None` means "all tracked assets" and must survive the chain as `None` —
//! a decorator must not collapse it into an empty set.

use crate::core::error::Result;
use crate::core::interned_path::InternedPath;
use crate::core::status::VersionControlStatus;
use serde::{Deserialize, Serialize};

/// How thoroughly a status refresh should reflect backend state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLevel {
    /// Reuse whatever reflection level the record already has
    Previous,
    /// Local working-copy inspection only
    Local,
    /// Query the remote backend
    Remote,
}

/// Delete behavior for local copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationMode {
    /// Remove from version control but keep the local copy
    KeepLocal,
    /// Remove from version control and delete the local copy
    DeleteLocal,
}

/// Conflict resolution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictResolution {
    /// Keep the local version
    Mine,
    /// Take the backend version
    Theirs,
    /// Mark resolved without changing content
    Ignore,
}

/// The operation surface exposed to callers and threaded through decorators.
///
/// Implementations must be shareable across threads; all operations are
/// synchronous with respect to their effect on the status database except
/// [`request_status`](VersionControlCommands::request_status), which may
/// dispatch to a background worker and return before the refresh lands.
pub trait VersionControlCommands: Send + Sync {
    /// Asynchronously request a status refresh. Returns true if the request
    /// was dispatched, not that it completed.
    fn request_status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool;

    /// Synchronously refresh status for the given assets (or all, for `None`).
    fn status(&self, assets: Option<&[InternedPath]>, level: StatusLevel) -> bool;

    /// Pull latest versions from the backend. `None` means all tracked assets.
    fn update(&self, assets: Option<&[InternedPath]>) -> bool;

    /// Submit local changes. True iff the backend reports success for all
    /// given assets.
    fn commit(&self, assets: &[InternedPath], message: &str) -> bool;

    /// Mark assets for version control.
    fn add(&self, assets: &[InternedPath]) -> bool;

    /// Discard local changes, restoring backend state.
    fn revert(&self, assets: &[InternedPath]) -> bool;

    /// Remove assets; `mode` distinguishes keeping vs. deleting local copies.
    fn delete(&self, assets: &[InternedPath], mode: OperationMode) -> bool;

    /// Rename one asset. Single path pair, not a set.
    fn move_asset(&self, from: &InternedPath, to: &InternedPath) -> bool;

    /// Resolve conflicts per the given resolution policy.
    fn resolve(&self, assets: &[InternedPath], resolution: ConflictResolution) -> bool;

    /// Current status record for one asset, or `None` meaning "unknown".
    fn get_asset_status(&self, asset: &InternedPath) -> Option<VersionControlStatus>;

    /// Filtered view of the status database.
    fn get_filtered_assets(
        &self,
        filter: &dyn Fn(&VersionControlStatus) -> bool,
    ) -> Vec<VersionControlStatus>;

    /// Evict entries from the status database without contacting the backend.
    fn remove_from_database(&self, assets: &[InternedPath]);
}

/// One mutating backend operation, as handed to [`RawStatusProvider`].
#[derive(Debug)]
pub enum OperationRequest<'a> {
    Update {
        assets: Option<&'a [InternedPath]>,
    },
    Commit {
        assets: &'a [InternedPath],
        message: &'a str,
    },
    Add {
        assets: &'a [InternedPath],
    },
    Revert {
        assets: &'a [InternedPath],
    },
    Delete {
        assets: &'a [InternedPath],
        mode: OperationMode,
    },
    Move {
        from: &'a InternedPath,
        to: &'a InternedPath,
    },
    Resolve {
        assets: &'a [InternedPath],
        resolution: ConflictResolution,
    },
}

impl OperationRequest<'_> {
    /// Operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            OperationRequest::Update { .. } => "update",
            OperationRequest::Commit { .. } => "commit",
            OperationRequest::Add { .. } => "add",
            OperationRequest::Revert { .. } => "revert",
            OperationRequest::Delete { .. } => "delete",
            OperationRequest::Move { .. } => "move",
            OperationRequest::Resolve { .. } => "resolve",
        }
    }
}

/// External capability: runs backend commands and returns parsed results.
///
/// This is the terminal implementation's sole dependency on the excluded
/// process-execution/parsing collaborator. The core never parses raw backend
/// output; it only accepts already-structured status records.
pub trait RawStatusProvider: Send + Sync {
    /// Run a status query for the given assets (`None` = all tracked assets)
    /// and return the parsed status records.
    fn run_status(
        &self,
        assets: Option<&[InternedPath]>,
        level: StatusLevel,
    ) -> Result<Vec<VersionControlStatus>>;

    /// Run one mutating backend operation. `Ok(false)` means the backend ran
    /// and reported failure; `Err` means the backend could not be reached.
    fn run_operation(&self, request: OperationRequest<'_>) -> Result<bool>;
}

impl<P: RawStatusProvider + ?Sized> RawStatusProvider for std::sync::Arc<P> {
    fn run_status(
        &self,
        assets: Option<&[InternedPath]>,
        level: StatusLevel,
    ) -> Result<Vec<VersionControlStatus>> {
        (**self).run_status(assets, level)
    }

    fn run_operation(&self, request: OperationRequest<'_>) -> Result<bool> {
        (**self).run_operation(request)
    }
}
