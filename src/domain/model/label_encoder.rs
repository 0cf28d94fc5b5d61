//! Label encoder: a sorted class vocabulary where each label's code is its index.

use serde::{Deserialize, Serialize};

use super::EncoderDefinitionError;

/// Trained vocabulary for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EncoderClasses", into = "EncoderClasses")]
pub struct LabelEncoder {
    classes: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct EncoderClasses {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Builds an encoder from classes that are already sorted and unique.
    pub fn new(classes: Vec<String>) -> Result<Self, EncoderDefinitionError> {
        if classes.is_empty() {
            return Err(EncoderDefinitionError::Empty);
        }
        for pair in classes.windows(2) {
            if pair[0] == pair[1] {
                return Err(EncoderDefinitionError::Duplicate(pair[0].clone()));
            }
            if pair[0] > pair[1] {
                return Err(EncoderDefinitionError::Unsorted {
                    previous: pair[0].clone(),
                    next: pair[1].clone(),
                });
            }
        }
        Ok(Self { classes })
    }

    /// Builds an encoder by sorting and deduplicating arbitrary labels.
    pub fn fit<I, S>(labels: I) -> Result<Self, EncoderDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self::new(classes)
    }

    /// Known labels in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a constructed encoder.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Code of a label, if it was seen at training time.
    pub fn transform(&self, label: &str) -> Option<u32> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .ok()
            .map(|idx| idx as u32)
    }

    /// Label of a code, if the code is within the trained range.
    pub fn inverse_transform(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }
}

impl TryFrom<EncoderClasses> for LabelEncoder {
    type Error = EncoderDefinitionError;

    fn try_from(value: EncoderClasses) -> Result<Self, Self::Error> {
        LabelEncoder::new(value.classes)
    }
}

impl From<LabelEncoder> for EncoderClasses {
    fn from(value: LabelEncoder) -> Self {
        EncoderClasses {
            classes: value.classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn housing() -> LabelEncoder {
        LabelEncoder::new(vec![
            "Locataire".to_string(),
            "Propriétaire".to_string(),
            "Sans domicile".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn transform_returns_index_of_label() {
        let encoder = housing();
        assert_eq!(encoder.transform("Locataire"), Some(0));
        assert_eq!(encoder.transform("Sans domicile"), Some(2));
    }

    #[test]
    fn transform_rejects_unseen_label() {
        assert_eq!(housing().transform("Château"), None);
    }

    #[test]
    fn inverse_transform_is_bounded() {
        let encoder = housing();
        assert_eq!(encoder.inverse_transform(1), Some("Propriétaire"));
        assert_eq!(encoder.inverse_transform(3), None);
    }

    #[test]
    fn new_rejects_unsorted_classes() {
        let err = LabelEncoder::new(vec!["b".to_string(), "a".to_string()]).unwrap_err();
        assert!(matches!(err, EncoderDefinitionError::Unsorted { .. }));
    }

    #[test]
    fn new_rejects_duplicates_and_empty() {
        let err = LabelEncoder::new(vec!["a".to_string(), "a".to_string()]).unwrap_err();
        assert_eq!(err, EncoderDefinitionError::Duplicate("a".to_string()));
        assert_eq!(LabelEncoder::new(vec![]), Err(EncoderDefinitionError::Empty));
    }

    #[test]
    fn fit_sorts_and_deduplicates() {
        let encoder = LabelEncoder::fit(["Santé", "Emploi", "Santé", "Logement"]).unwrap();
        assert_eq!(encoder.classes(), &["Emploi", "Logement", "Santé"]);
    }

    #[test]
    fn deserialization_validates_classes() {
        let ok: LabelEncoder = serde_json::from_str(r#"{"classes": ["a", "b"]}"#).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<LabelEncoder>(r#"{"classes": ["b", "a"]}"#);
        assert!(bad.is_err());
    }
}
