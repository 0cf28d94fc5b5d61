//! Model artifact - the exported bundle of encoders, feature order and trees.
//!
//! ```json
//! {
//!   "feature_names": ["request_reason", "diagnosis", "housing_type", "income_bracket"],
//!   "encoders": { "request_reason": { "classes": ["Emploi", "Logement"] }, ... },
//!   "target_encoder": { "classes": ["Hébergement", "Santé mentale"] },
//!   "model": { "kind": "random_forest", "trees": [ { "nodes": [ ... ] } ] }
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::model::{
    CategoricalField, EncodingRegistry, LabelEncoder, RegistryDefinitionError, UnknownField,
};

use super::tree_ensemble::{DecisionTree, TreeDefinitionError, TreeEnsemble};

/// Errors raised while loading or validating the model artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model artifact not readable at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model artifact lists an unknown feature: {0}")]
    UnknownFeature(#[from] UnknownField),

    #[error("Model artifact encoders are inconsistent: {0}")]
    Registry(#[from] RegistryDefinitionError),

    #[error("Model artifact trees are invalid: {0}")]
    Trees(#[from] TreeDefinitionError),

    #[error("A decision_tree artifact must contain exactly one tree, found {0}")]
    TreeCount(usize),

    #[error("Model has already been loaded for this process")]
    AlreadyLoaded,
}

/// Which estimator produced the trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    DecisionTree,
    RandomForest,
}

/// Serialized estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub kind: ModelKind,
    pub trees: Vec<DecisionTree>,
}

/// The artifact as read from disk, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub encoders: HashMap<String, LabelEncoder>,
    pub target_encoder: LabelEncoder,
    pub model: ModelDefinition,
}

impl ModelArtifact {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validates the artifact and splits it into registry and classifier.
    pub fn into_parts(self) -> Result<(EncodingRegistry, TreeEnsemble), ArtifactError> {
        let feature_order = self
            .feature_names
            .iter()
            .map(|name| name.parse::<CategoricalField>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut encoders = HashMap::new();
        for (name, encoder) in self.encoders {
            match name.parse::<CategoricalField>() {
                Ok(field) => {
                    encoders.insert(field, encoder);
                }
                Err(_) => {
                    tracing::warn!(encoder = %name, "Ignoring encoder for a column the model does not use");
                }
            }
        }

        let n_classes = self.target_encoder.len();
        let registry = EncodingRegistry::new(encoders, feature_order, self.target_encoder)?;

        if self.model.kind == ModelKind::DecisionTree && self.model.trees.len() != 1 {
            return Err(ArtifactError::TreeCount(self.model.trees.len()));
        }
        let classifier =
            TreeEnsemble::new(self.model.trees, registry.feature_order().len(), n_classes)?;

        Ok((registry, classifier))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/affectation_model.json"
    ));

    #[test]
    fn fixture_loads_into_registry_and_forest() {
        let artifact = ModelArtifact::from_json(FIXTURE.as_bytes()).unwrap();
        let (registry, classifier) = artifact.into_parts().unwrap();

        assert_eq!(registry.feature_order(), &CategoricalField::ALL);
        assert_eq!(registry.target_class_count(), 3);
        assert_eq!(classifier.tree_count(), 2);
    }

    #[test]
    fn unknown_feature_name_fails_to_load() {
        let mut artifact = ModelArtifact::from_json(FIXTURE.as_bytes()).unwrap();
        artifact.feature_names[0] = "PATIENT Motif Demande".to_string();
        assert!(matches!(
            artifact.into_parts(),
            Err(ArtifactError::UnknownFeature(_))
        ));
    }

    #[test]
    fn extra_encoders_are_ignored() {
        let mut artifact = ModelArtifact::from_json(FIXTURE.as_bytes()).unwrap();
        artifact.encoders.insert(
            "postal_code".to_string(),
            LabelEncoder::fit(["H2X", "H3A"]).unwrap(),
        );
        assert!(artifact.into_parts().is_ok());
    }

    #[test]
    fn missing_encoder_fails_to_load() {
        let mut artifact = ModelArtifact::from_json(FIXTURE.as_bytes()).unwrap();
        artifact.encoders.remove("housing_type");
        assert!(matches!(
            artifact.into_parts(),
            Err(ArtifactError::Registry(RegistryDefinitionError::MissingEncoder(
                CategoricalField::HousingType
            )))
        ));
    }

    #[test]
    fn decision_tree_kind_requires_one_tree() {
        let mut artifact = ModelArtifact::from_json(FIXTURE.as_bytes()).unwrap();
        artifact.model.kind = ModelKind::DecisionTree;
        assert!(matches!(artifact.into_parts(), Err(ArtifactError::TreeCount(2))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ModelArtifact::from_json(b"{not json"),
            Err(ArtifactError::Parse(_))
        ));
    }
}
