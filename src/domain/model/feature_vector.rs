//! Feature vector: the encoded, ordered model input. Never persisted.

use serde::Serialize;

use super::{CategoricalField, EncodingError, EncodingRegistry};

/// Integer codes laid out in the registry's feature order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    fields: Vec<CategoricalField>,
    codes: Vec<u32>,
}

impl FeatureVector {
    /// Encodes one label per feature slot, asking `value_of` for each field in
    /// the order the registry declares.
    pub fn encode<'a, F>(registry: &EncodingRegistry, value_of: F) -> Result<Self, EncodingError>
    where
        F: Fn(CategoricalField) -> &'a str,
    {
        let fields = registry.feature_order().to_vec();
        let codes = fields
            .iter()
            .map(|field| registry.encode(*field, value_of(*field)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields, codes })
    }

    /// Builds a vector from raw codes, for classifiers exercised in isolation.
    pub fn from_codes(fields: Vec<CategoricalField>, codes: Vec<u32>) -> Self {
        Self { fields, codes }
    }

    /// Codes in model column order.
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Code placed in a given field's slot.
    pub fn code_of(&self, field: CategoricalField) -> Option<u32> {
        self.fields
            .iter()
            .position(|f| *f == field)
            .map(|idx| self.codes[idx])
    }

    /// Number of feature slots.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when there are no feature slots.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
