//! Answer Set - the validated responses collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::model::{CategoricalField, EncodingError, EncodingRegistry};

/// Age of the person, constrained to 1..=120 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Age(u8);

impl Age {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 120;

    /// Validates an age in years.
    pub fn new(years: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&years) {
            return Err(ValidationError::out_of_range("age", Self::MIN, Self::MAX, years));
        }
        Ok(Self(years as u8))
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for i64 {
    fn from(age: Age) -> Self {
        i64::from(age.0)
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete set of answers: all seven keys present and individually valid.
///
/// Holding an `AnswerSet` is the precondition for running the affectation
/// pipeline; the wizard only produces one once every step has validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnswerSetFields", into = "AnswerSetFields")]
pub struct AnswerSet {
    name: String,
    surname: String,
    age: Age,
    request_reason: String,
    diagnosis: Vec<String>,
    housing_type: String,
    income_bracket: String,
}

#[derive(Serialize, Deserialize)]
struct AnswerSetFields {
    name: String,
    surname: String,
    age: Age,
    request_reason: String,
    diagnosis: Vec<String>,
    housing_type: String,
    income_bracket: String,
}

impl AnswerSet {
    /// Builds an answer set, enforcing the constraints that do not depend on
    /// the trained vocabulary (non-empty texts, at least one diagnosis).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: Age,
        request_reason: impl Into<String>,
        diagnosis: Vec<String>,
        housing_type: impl Into<String>,
        income_bracket: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let answers = Self {
            name: non_empty("name", name.into())?,
            surname: non_empty("surname", surname.into())?,
            age,
            request_reason: non_empty("request_reason", request_reason.into())?,
            diagnosis,
            housing_type: non_empty("housing_type", housing_type.into())?,
            income_bracket: non_empty("income_bracket", income_bracket.into())?,
        };
        if answers.diagnosis.is_empty() {
            return Err(ValidationError::empty_field("diagnosis"));
        }
        for diagnosis in &answers.diagnosis {
            non_empty("diagnosis", diagnosis.clone())?;
        }
        Ok(answers)
    }

    /// Checks every categorical answer against the registry's vocabulary,
    /// including diagnoses that never reach the model.
    pub fn check_vocabulary(&self, registry: &EncodingRegistry) -> Result<(), EncodingError> {
        let singles = [
            (CategoricalField::RequestReason, &self.request_reason),
            (CategoricalField::HousingType, &self.housing_type),
            (CategoricalField::IncomeBracket, &self.income_bracket),
        ];
        let diagnoses = self
            .diagnosis
            .iter()
            .map(|diagnosis| (CategoricalField::Diagnosis, diagnosis));
        for (field, value) in singles.into_iter().chain(diagnoses) {
            if !registry.is_known(field, value) {
                return Err(EncodingError::UnknownCategory {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn request_reason(&self) -> &str {
        &self.request_reason
    }

    /// All selected diagnoses, in selection order.
    pub fn diagnosis(&self) -> &[String] {
        &self.diagnosis
    }

    pub fn housing_type(&self) -> &str {
        &self.housing_type
    }

    pub fn income_bracket(&self) -> &str {
        &self.income_bracket
    }

    /// Label fed to the model for a field.
    ///
    /// The model has a single diagnosis slot, so only the first selected
    /// diagnosis is used; the remaining ones are kept in the record only.
    pub fn model_input(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::RequestReason => &self.request_reason,
            CategoricalField::Diagnosis => &self.diagnosis[0],
            CategoricalField::HousingType => &self.housing_type,
            CategoricalField::IncomeBracket => &self.income_bracket,
        }
    }
}

impl TryFrom<AnswerSetFields> for AnswerSet {
    type Error = ValidationError;

    fn try_from(f: AnswerSetFields) -> Result<Self, Self::Error> {
        AnswerSet::new(
            f.name,
            f.surname,
            f.age,
            f.request_reason,
            f.diagnosis,
            f.housing_type,
            f.income_bracket,
        )
    }
}

impl From<AnswerSet> for AnswerSetFields {
    fn from(a: AnswerSet) -> Self {
        AnswerSetFields {
            name: a.name,
            surname: a.surname,
            age: a.age,
            request_reason: a.request_reason,
            diagnosis: a.diagnosis,
            housing_type: a.housing_type,
            income_bracket: a.income_bracket,
        }
    }
}

fn non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
