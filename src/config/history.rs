//! History store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the affectation history is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Path to the YAML history file, created on first append
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("history.file_path"));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
        }
    }
}

fn default_file_path() -> PathBuf {
    PathBuf::from("historique_affectations.yaml")
}
