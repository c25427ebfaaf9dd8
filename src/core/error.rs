//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`VersionControlError`] for the failure modes that are
//! *not* ordinary backend failures. Backend failures stay inside the command
//! chain as boolean results (see [`crate::commands::VersionControlCommands`]);
//! errors here cover construction-time misconfiguration, settings persistence,
//! and the [`RawStatusProvider`](crate::commands::RawStatusProvider) boundary.
//!
//! # Public API
//! - [`VersionControlError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, VersionControlError>`

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for asset-vcs
#[derive(Error, Debug)]
pub enum VersionControlError {
    // Settings errors
    #[error("Companion suffix must not be empty")]
    EmptyCompanionSuffix,

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Provider boundary errors
    #[error("Backend provider failed: {message}")]
    Provider { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using VersionControlError
pub type Result<T> = std::result::Result<T, VersionControlError>;

impl VersionControlError {
    /// Create a provider error with a specific message
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a settings read error
    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings write error
    pub fn settings_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse error
    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }
}
