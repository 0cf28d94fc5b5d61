//! EncodingRegistry - the trained vocabularies behind every selectable option.
//!
//! The registry is the single source of truth for:
//! - the option lists shown to the user at each selection step
//! - the label → code mapping applied before prediction
//! - the column order the model expects (`feature_order`)
//! - the code → label mapping applied to the model's output
//!
//! It is built once from the model artifact and never mutated afterwards, so it
//! can be shared across sessions behind a plain `&'static` or `Arc`.

use std::collections::HashMap;

use super::{CategoricalField, EncodingError, LabelEncoder, RegistryDefinitionError};

/// Read-only set of label encoders plus the model's feature order.
#[derive(Debug, Clone)]
pub struct EncodingRegistry {
    encoders: HashMap<CategoricalField, LabelEncoder>,
    feature_order: Vec<CategoricalField>,
    target: LabelEncoder,
}

impl EncodingRegistry {
    /// Assembles a registry, checking that every categorical field has an
    /// encoder and appears exactly once in `feature_order`.
    pub fn new(
        encoders: HashMap<CategoricalField, LabelEncoder>,
        feature_order: Vec<CategoricalField>,
        target: LabelEncoder,
    ) -> Result<Self, RegistryDefinitionError> {
        for (idx, field) in feature_order.iter().enumerate() {
            if feature_order[..idx].contains(field) {
                return Err(RegistryDefinitionError::DuplicateFeature(*field));
            }
        }
        for field in CategoricalField::ALL {
            if !encoders.contains_key(&field) {
                return Err(RegistryDefinitionError::MissingEncoder(field));
            }
            if !feature_order.contains(&field) {
                return Err(RegistryDefinitionError::MissingFeature(field));
            }
        }

        Ok(Self {
            encoders,
            feature_order,
            target,
        })
    }

    /// Known labels for a field, sorted and deduplicated.
    pub fn classes_of(&self, field: CategoricalField) -> &[String] {
        self.encoders
            .get(&field)
            .map(LabelEncoder::classes)
            .unwrap_or_default()
    }

    /// Returns true if `value` belongs to the field's trained vocabulary.
    pub fn is_known(&self, field: CategoricalField, value: &str) -> bool {
        self.encoders
            .get(&field)
            .and_then(|encoder| encoder.transform(value))
            .is_some()
    }

    /// Maps a label to the integer code the model expects.
    pub fn encode(&self, field: CategoricalField, value: &str) -> Result<u32, EncodingError> {
        self.encoders
            .get(&field)
            .and_then(|encoder| encoder.transform(value))
            .ok_or_else(|| EncodingError::UnknownCategory {
                field,
                value: value.to_string(),
            })
    }

    /// Maps a predicted code back to the service label.
    pub fn decode_target(&self, code: u32) -> Result<&str, EncodingError> {
        self.target
            .inverse_transform(code)
            .ok_or(EncodingError::UnknownCode {
                code,
                known: self.target.len(),
            })
    }

    /// Column order the model was trained on.
    pub fn feature_order(&self) -> &[CategoricalField] {
        &self.feature_order
    }

    /// Number of target classes the model can predict.
    pub fn target_class_count(&self) -> usize {
        self.target.len()
    }
}
