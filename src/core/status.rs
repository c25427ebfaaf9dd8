//! Type-safe version-control status types.
//!
//! This module defines [`FileStatus`] and [`ReflectionLevel`], the typed
//! vocabulary for "what do we believe the backend thinks of this file", plus
//! [`VersionControlStatus`], the per-path record stored in the status
//! database. Status values are proper enumerations rather than backend status
//! letters, so call sites get compile-time checking instead of string
//! matching.
//!
//! # Public API
//! - [`FileStatus`]: Main enumeration for all file status types
//! - [`ReflectionLevel`]: How a status was determined (local vs. remote)
//! - [`VersionControlStatus`]: One path's last known status record
//!
//! # Key Features
//! - **Type safety**: Compile-time checking instead of string comparisons
//! - **Display formatting**: Consistent string representation for output
//! - **Policy table**: Explicit, total add/commit candidacy rules

use crate::core::interned_path::InternedPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version-control state of a single file, as last reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileStatus {
    /// Tracked and unchanged
    Normal,
    /// Scheduled for addition
    Added,
    /// In conflict with the backend version
    Conflicted,
    /// Scheduled for deletion
    Deleted,
    /// Matched by an ignore rule
    Ignored,
    /// Tracked with local modifications
    Modified,
    /// Replaced (deleted then re-added) since the last sync
    Replaced,
    /// Present on disk but not under version control
    Unversioned,
    /// Tracked but absent from disk
    Missing,
    /// Owned by an external/nested working copy
    External,
    /// Working copy entry obstructed by an unexpected item
    Obstructed,
}

impl FileStatus {
    /// Short status code for compact display
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Normal => " ",
            FileStatus::Added => "A",
            FileStatus::Conflicted => "C",
            FileStatus::Deleted => "D",
            FileStatus::Ignored => "I",
            FileStatus::Modified => "M",
            FileStatus::Replaced => "R",
            FileStatus::Unversioned => "?",
            FileStatus::Missing => "!",
            FileStatus::External => "X",
            FileStatus::Obstructed => "~",
        }
    }

    /// Human-readable description for status output
    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Normal => "normal",
            FileStatus::Added => "added",
            FileStatus::Conflicted => "conflicted",
            FileStatus::Deleted => "deleted",
            FileStatus::Ignored => "ignored",
            FileStatus::Modified => "modified",
            FileStatus::Replaced => "replaced",
            FileStatus::Unversioned => "unversioned",
            FileStatus::Missing => "missing",
            FileStatus::External => "external",
            FileStatus::Obstructed => "obstructed",
        }
    }

    /// Whether a bulk Add should include a file in this state.
    ///
    /// Only unversioned files are meaningful add targets: everything else is
    /// either already tracked, gone from disk, or not ours to add. The match
    /// is total so a new status value forces a deliberate decision here.
    pub fn is_add_candidate(&self) -> bool {
        match self {
            FileStatus::Unversioned => true,
            FileStatus::Normal
            | FileStatus::Added
            | FileStatus::Conflicted
            | FileStatus::Deleted
            | FileStatus::Ignored
            | FileStatus::Modified
            | FileStatus::Replaced
            | FileStatus::Missing
            | FileStatus::External
            | FileStatus::Obstructed => false,
        }
    }

    /// Whether a bulk Commit should include a file in this state.
    ///
    /// Pending local changes commit; conflicts must be resolved first, and
    /// unversioned files must be added first. Unlisted states are excluded.
    pub fn is_commit_candidate(&self) -> bool {
        match self {
            FileStatus::Added
            | FileStatus::Deleted
            | FileStatus::Modified
            | FileStatus::Replaced => true,
            FileStatus::Normal
            | FileStatus::Conflicted
            | FileStatus::Ignored
            | FileStatus::Unversioned
            | FileStatus::Missing
            | FileStatus::External
            | FileStatus::Obstructed => false,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a status record was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectionLevel {
    /// Never inspected
    None,
    /// A refresh has been requested but has not completed
    Pending,
    /// Known from local working-copy inspection only
    Local,
    /// Known from querying the remote backend
    Remote,
}

/// Last known version-control state of one asset path.
///
/// Records are replaced wholesale on refresh, never field-patched, so a read
/// always observes one coherent backend answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionControlStatus {
    pub asset_path: InternedPath,
    pub file_status: FileStatus,
    pub reflection_level: ReflectionLevel,
    /// Lock owner as reported by the backend, if any
    pub owner: Option<String>,
    /// Whether the lock, if any, is held by this working copy
    pub locked_by_us: bool,
}

impl VersionControlStatus {
    pub fn new(
        asset_path: impl Into<InternedPath>,
        file_status: FileStatus,
        reflection_level: ReflectionLevel,
    ) -> Self {
        Self {
            asset_path: asset_path.into(),
            file_status,
            reflection_level,
            owner: None,
            locked_by_us: false,
        }
    }

    /// Convenience constructor for locally-reflected records
    pub fn local(asset_path: impl Into<InternedPath>, file_status: FileStatus) -> Self {
        Self::new(asset_path, file_status, ReflectionLevel::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_status_as_str() {
        assert_eq!(FileStatus::Added.as_str(), "A");
        assert_eq!(FileStatus::Deleted.as_str(), "D");
        assert_eq!(FileStatus::Unversioned.as_str(), "?");
        assert_eq!(FileStatus::Missing.as_str(), "!");
        assert_eq!(FileStatus::Conflicted.as_str(), "C");
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(format!("{}", FileStatus::Modified), "M");
        assert_eq!(format!("{}", FileStatus::Obstructed), "~");
    }

    #[test]
    fn test_description() {
        assert_eq!(FileStatus::Unversioned.description(), "unversioned");
        assert_eq!(FileStatus::Conflicted.description(), "conflicted");
        assert_eq!(FileStatus::Replaced.description(), "replaced");
    }

    #[test]
    fn test_add_policy_table() {
        assert!(FileStatus::Unversioned.is_add_candidate());
        assert!(!FileStatus::Normal.is_add_candidate());
        assert!(!FileStatus::Added.is_add_candidate());
        assert!(!FileStatus::Deleted.is_add_candidate());
        assert!(!FileStatus::Missing.is_add_candidate());
        assert!(!FileStatus::Ignored.is_add_candidate());
    }

    #[test]
    fn test_commit_policy_table() {
        assert!(FileStatus::Added.is_commit_candidate());
        assert!(FileStatus::Deleted.is_commit_candidate());
        assert!(FileStatus::Modified.is_commit_candidate());
        assert!(FileStatus::Replaced.is_commit_candidate());
        // conflicts resolve first, unversioned files add first
        assert!(!FileStatus::Conflicted.is_commit_candidate());
        assert!(!FileStatus::Unversioned.is_commit_candidate());
        assert!(!FileStatus::Normal.is_commit_candidate());
        assert!(!FileStatus::Missing.is_commit_candidate());
    }

    #[test]
    fn test_status_record_constructors() {
        let status = VersionControlStatus::local("Assets/foo.cs", FileStatus::Added);
        assert_eq!(status.asset_path.as_str(), "Assets/foo.cs");
        assert_eq!(status.file_status, FileStatus::Added);
        assert_eq!(status.reflection_level, ReflectionLevel::Local);
        assert_eq!(status.owner, None);
        assert!(!status.locked_by_us);
    }

    #[test]
    fn test_status_serde_round_trip() {
        let status = VersionControlStatus::new(
            "Assets/foo.cs",
            FileStatus::Conflicted,
            ReflectionLevel::Remote,
        );
        let json = serde_json::to_string(&status).unwrap();
        let back: VersionControlStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
