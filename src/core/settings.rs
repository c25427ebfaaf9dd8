use crate::core::error::{Result, VersionControlError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Companion-file convention: the literal suffix appended to a primary asset
/// path to form its companion path, and the root prefix under which the
/// convention applies. These are settings, not constants baked into the
/// decorator algorithms.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanionSettings {
    pub suffix: String,
    pub root: String,
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            suffix: ".meta".to_string(),
            root: "Assets/".to_string(),
        }
    }
}

impl CompanionSettings {
    pub fn new(suffix: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            root: root.into(),
        }
    }

    /// An empty suffix would make every path its own companion; building a
    /// decorator over such settings is a setup error, not a runtime one.
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(VersionControlError::EmptyCompanionSuffix);
        }
        Ok(())
    }

    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| VersionControlError::settings_read_failed(path, e))?;
            let settings: Self = serde_json::from_str(&content)
                .map_err(|e| VersionControlError::settings_parse_failed(path, e))?;
            settings.validate()?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| VersionControlError::settings_write_failed(path, e))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| VersionControlError::settings_write_failed(path, e))?;
        Ok(())
    }
}
