//! Raw answers as sent by the presentation layer, before validation.

use serde::{Deserialize, Serialize};

use crate::domain::affectation::Age;
use crate::domain::foundation::ValidationError;
use crate::domain::model::{CategoricalField, EncodingRegistry};

/// One user-entered value for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Integer(i64),
    Text(String),
    Choices(Vec<String>),
}

impl RawAnswer {
    pub fn text(value: impl Into<String>) -> Self {
        RawAnswer::Text(value.into())
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawAnswer::Choices(values.into_iter().map(Into::into).collect())
    }

    /// Non-empty trimmed text.
    pub(crate) fn require_text(&self, field: &str) -> Result<String, ValidationError> {
        match self {
            RawAnswer::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(ValidationError::empty_field(field))
                } else {
                    Ok(trimmed.to_string())
                }
            }
            _ => Err(ValidationError::invalid_format(field, "expected a text value")),
        }
    }

    /// Integer age within bounds; numeric text is accepted.
    pub(crate) fn require_age(&self) -> Result<Age, ValidationError> {
        let years = match self {
            RawAnswer::Integer(years) => *years,
            RawAnswer::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field("age"));
                }
                trimmed
                    .parse::<i64>()
                    .map_err(|_| ValidationError::invalid_format("age", "expected a whole number"))?
            }
            RawAnswer::Choices(_) => {
                return Err(ValidationError::invalid_format("age", "expected a whole number"))
            }
        };
        Age::new(years)
    }

    /// A single option from the field's trained vocabulary.
    pub(crate) fn require_choice(
        &self,
        field: CategoricalField,
        registry: &EncodingRegistry,
    ) -> Result<String, ValidationError> {
        let value = self.require_text(field.as_str())?;
        if !registry.is_known(field, &value) {
            return Err(ValidationError::unknown_option(field.as_str(), value));
        }
        Ok(value)
    }

    /// A non-empty set of known options, duplicates dropped, order kept.
    pub(crate) fn require_choices(
        &self,
        field: CategoricalField,
        registry: &EncodingRegistry,
    ) -> Result<Vec<String>, ValidationError> {
        let raw: Vec<&str> = match self {
            RawAnswer::Choices(values) => values.iter().map(String::as_str).collect(),
            RawAnswer::Text(value) => vec![value.as_str()],
            RawAnswer::Integer(_) => {
                return Err(ValidationError::invalid_format(
                    field.as_str(),
                    "expected one or more options",
                ))
            }
        };

        let mut selected: Vec<String> = Vec::with_capacity(raw.len());
        for value in raw.into_iter().map(str::trim).filter(|v| !v.is_empty()) {
            if !registry.is_known(field, value) {
                return Err(ValidationError::unknown_option(field.as_str(), value));
            }
            if !selected.iter().any(|s| s == value) {
                selected.push(value.to_string());
            }
        }
        if selected.is_empty() {
            return Err(ValidationError::empty_field(field.as_str()));
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::registry::tests::sample_registry;

    #[test]
    fn deserializes_untagged_values() {
        assert_eq!(
            serde_json::from_str::<RawAnswer>("34").unwrap(),
            RawAnswer::Integer(34)
        );
        assert_eq!(
            serde_json::from_str::<RawAnswer>("\"Dupont\"").unwrap(),
            RawAnswer::text("Dupont")
        );
        assert_eq!(
            serde_json::from_str::<RawAnswer>("[\"A\",\"B\"]").unwrap(),
            RawAnswer::choices(["A", "B"])
        );
    }

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(RawAnswer::text("  Marie ").require_text("surname").unwrap(), "Marie");
        assert_eq!(
            RawAnswer::text("   ").require_text("surname"),
            Err(ValidationError::empty_field("surname"))
        );
    }

    #[test]
    fn require_age_accepts_numeric_text() {
        assert_eq!(RawAnswer::text(" 34 ").require_age().unwrap().years(), 34);
        assert!(RawAnswer::text("trente").require_age().is_err());
        assert!(RawAnswer::Integer(121).require_age().is_err());
    }

    #[test]
    fn require_choice_checks_vocabulary() {
        let registry = sample_registry();
        assert_eq!(
            RawAnswer::text("Logement")
                .require_choice(CategoricalField::RequestReason, &registry)
                .unwrap(),
            "Logement"
        );
        assert_eq!(
            RawAnswer::text("Vacances").require_choice(CategoricalField::RequestReason, &registry),
            Err(ValidationError::unknown_option("request_reason", "Vacances"))
        );
    }

    #[test]
    fn require_choices_dedupes_and_keeps_order() {
        let registry = sample_registry();
        let selected = RawAnswer::choices(["Dépression", "Anxiété", "Dépression", " "])
            .require_choices(CategoricalField::Diagnosis, &registry)
            .unwrap();
        assert_eq!(selected, vec!["Dépression", "Anxiété"]);
    }

    #[test]
    fn require_choices_rejects_empty_selection() {
        let registry = sample_registry();
        assert_eq!(
            RawAnswer::Choices(vec![]).require_choices(CategoricalField::Diagnosis, &registry),
            Err(ValidationError::empty_field("diagnosis"))
        );
    }
}
