//! ModelBundle - the process-wide, read-only model state.
//!
//! Loaded once at startup from the artifact path, then installed into a
//! `OnceCell`. After installation nothing mutates it, so sessions read it
//! concurrently without locking.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};

use crate::domain::model::EncodingRegistry;
use crate::ports::Classifier;

use super::artifact::{ArtifactError, ModelArtifact};
use super::tree_ensemble::TreeEnsemble;

static MODEL: OnceCell<ModelBundle> = OnceCell::new();

/// Encoders and classifier loaded from one artifact.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    registry: Arc<EncodingRegistry>,
    classifier: Arc<TreeEnsemble>,
    fingerprint: String,
}

impl ModelBundle {
    /// Parses and validates artifact bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let fingerprint = format!("{:x}", Sha256::digest(bytes));
        let (registry, classifier) = ModelArtifact::from_json(bytes)?.into_parts()?;
        Ok(Self {
            registry: Arc::new(registry),
            classifier: Arc::new(classifier),
            fingerprint,
        })
    }

    /// Reads the artifact from disk. A missing file is a fatal startup error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::from_bytes(&bytes)?;
        tracing::info!(
            path = %path.display(),
            sha256 = %bundle.fingerprint,
            trees = bundle.classifier.tree_count(),
            features = bundle.registry.feature_order().len(),
            "Model artifact loaded"
        );
        Ok(bundle)
    }

    /// Installs the bundle as the process-wide model. Only the first call wins.
    pub fn install(self) -> Result<&'static ModelBundle, ArtifactError> {
        MODEL.set(self).map_err(|_| ArtifactError::AlreadyLoaded)?;
        MODEL.get().ok_or(ArtifactError::AlreadyLoaded)
    }

    /// The installed model, if startup has loaded one.
    pub fn global() -> Option<&'static ModelBundle> {
        MODEL.get()
    }

    pub fn registry(&self) -> Arc<EncodingRegistry> {
        self.registry.clone()
    }

    pub fn classifier(&self) -> Arc<dyn Classifier> {
        self.classifier.clone()
    }

    /// SHA-256 of the artifact bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
