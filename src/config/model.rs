//! Model artifact configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the pre-trained model artifact lives
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.artifact_path"));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("modele_affectation.json")
}
