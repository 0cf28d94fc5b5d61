//! What the presentation layer needs to render a step.

use serde::Serialize;

use crate::domain::affectation::Age;
use crate::domain::model::EncodingRegistry;

use super::{StepSequence, WizardStep};

/// Kind of input widget a step expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Integer { min: i64, max: i64 },
    SingleChoice { options: Vec<String> },
    MultiChoice { options: Vec<String> },
    Result,
}

/// Prompt text plus either the valid options or a constraint description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepPrompt {
    pub step: WizardStep,
    pub index: u8,
    pub progress: f32,
    pub title: &'static str,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<&'static str>,
    pub input: InputKind,
}

impl StepPrompt {
    /// Builds the prompt for a step, pulling option lists from the registry.
    pub fn for_step(step: WizardStep, registry: &EncodingRegistry) -> Self {
        let options = || {
            step.categorical_field()
                .map(|field| registry.classes_of(field).to_vec())
                .unwrap_or_default()
        };

        let (title, question, constraint, input) = match step {
            WizardStep::Name => (
                "Ton nom",
                "Quel est ton nom ?",
                Some("Texte non vide"),
                InputKind::Text,
            ),
            WizardStep::Surname => (
                "Ton prénom",
                "Quel est ton prénom ?",
                Some("Texte non vide"),
                InputKind::Text,
            ),
            WizardStep::Age => (
                "Ton âge",
                "Quel est ton âge ?",
                Some("Nombre entier entre 1 et 120"),
                InputKind::Integer {
                    min: Age::MIN,
                    max: Age::MAX,
                },
            ),
            WizardStep::RequestReason => (
                "Motif de la demande",
                "Sélectionne le motif de ta demande :",
                None,
                InputKind::SingleChoice { options: options() },
            ),
            WizardStep::Diagnosis => (
                "Diagnostic",
                "Sélectionne un ou plusieurs diagnostics :",
                Some("Au moins un diagnostic"),
                InputKind::MultiChoice { options: options() },
            ),
            WizardStep::HousingType => (
                "Type de logement",
                "Quel est ton type de logement ?",
                None,
                InputKind::SingleChoice { options: options() },
            ),
            WizardStep::IncomeBracket => (
                "Tranche de revenu",
                "Quelle est ta tranche de revenu ?",
                None,
                InputKind::SingleChoice { options: options() },
            ),
            WizardStep::Result => (
                "Résultat de ton évaluation",
                "Voici le service le plus adapté à ton profil.",
                None,
                InputKind::Result,
            ),
        };

        Self {
            step,
            index: step.index(),
            progress: StepSequence::progress(step),
            title,
            question,
            constraint,
            input,
        }
    }
}
