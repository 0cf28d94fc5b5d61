//! RunAffectationHandler - encode, predict, decode and persist one answer set.
//!
//! Steps, in order:
//! 0. check every answer against the trained vocabulary
//! 1. encode the categorical answers in the registry's feature order
//! 2. ask the classifier for a target code
//! 3. decode the code into a service label
//! 4. append the resulting record to the history
//!
//! A failure before step 4 writes nothing. A failure at step 4 still returns
//! the computed record inside the error.

use std::sync::Arc;

use crate::domain::affectation::{
    first_mode, AffectationError, AffectationRecord, AnswerSet, DiagnosisStrategy,
};
use crate::domain::model::{CategoricalField, EncodingRegistry, FeatureVector};
use crate::ports::{Classifier, HistoryStore, ModelInferenceError};

/// Command to run the pipeline on a complete answer set.
#[derive(Debug, Clone)]
pub struct RunAffectationCommand {
    pub answers: AnswerSet,
}

/// Handler for the affectation pipeline.
pub struct RunAffectationHandler {
    registry: Arc<EncodingRegistry>,
    classifier: Arc<dyn Classifier>,
    history: Arc<dyn HistoryStore>,
    strategy: DiagnosisStrategy,
}

impl RunAffectationHandler {
    pub fn new(
        registry: Arc<EncodingRegistry>,
        classifier: Arc<dyn Classifier>,
        history: Arc<dyn HistoryStore>,
        strategy: DiagnosisStrategy,
    ) -> Self {
        Self {
            registry,
            classifier,
            history,
            strategy,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunAffectationCommand,
    ) -> Result<AffectationRecord, AffectationError> {
        let answers = cmd.answers;
        answers.check_vocabulary(&self.registry)?;

        // 1-3. Predict the service label
        let code = self.predict(&answers)?;
        let service = self.registry.decode_target(code)?.to_string();

        // 4. Persist
        let record = AffectationRecord::new(answers, service);
        if let Err(source) = self.history.append(&record).await {
            tracing::warn!(
                error = %source,
                service = %record.assigned_service(),
                "Affectation computed but not saved"
            );
            return Err(AffectationError::StoreUnavailable {
                record: Box::new(record),
                source,
            });
        }

        tracing::info!(
            service = %record.assigned_service(),
            strategy = ?self.strategy,
            "Affectation recorded"
        );
        Ok(record)
    }

    fn predict(&self, answers: &AnswerSet) -> Result<u32, AffectationError> {
        match self.strategy {
            DiagnosisStrategy::FirstOnly => {
                let features =
                    FeatureVector::encode(&self.registry, |field| answers.model_input(field))?;
                let code = self.classifier.predict(&features)?;
                tracing::debug!(features = ?features.codes(), code, "Prediction");
                Ok(code)
            }
            DiagnosisStrategy::MajorityVote => {
                let mut codes = Vec::with_capacity(answers.diagnosis().len());
                for diagnosis in answers.diagnosis() {
                    let features = FeatureVector::encode(&self.registry, |field| match field {
                        CategoricalField::Diagnosis => diagnosis.as_str(),
                        other => answers.model_input(other),
                    })?;
                    let code = self.classifier.predict(&features)?;
                    tracing::debug!(features = ?features.codes(), code, %diagnosis, "Prediction");
                    codes.push(code);
                }
                first_mode(&codes).ok_or_else(|| ModelInferenceError::NoPrediction.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::domain::affectation::answers::tests::dupont_answers;
    use crate::domain::affectation::Age;
    use crate::domain::model::registry::tests::sample_registry;
    use crate::domain::model::EncodingError;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Test doubles
    // ─────────────────────────────────────────────────────────────────────

    /// Returns a code chosen from the diagnosis slot and remembers every input.
    struct SpyClassifier {
        by_diagnosis: Vec<u32>,
        seen: Mutex<Vec<Vec<u32>>>,
    }

    impl SpyClassifier {
        fn new(by_diagnosis: Vec<u32>) -> Self {
            Self {
                by_diagnosis,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<Vec<u32>> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Classifier for SpyClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<u32, ModelInferenceError> {
            self.seen.lock().unwrap().push(features.codes().to_vec());
            let slot = features
                .code_of(CategoricalField::Diagnosis)
                .ok_or(ModelInferenceError::NoPrediction)?;
            Ok(self.by_diagnosis[slot as usize])
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<u32, ModelInferenceError> {
            Err(ModelInferenceError::Traversal("broken tree".to_string()))
        }
    }

    fn handler(
        classifier: Arc<dyn Classifier>,
        history: InMemoryHistoryStore,
        strategy: DiagnosisStrategy,
    ) -> RunAffectationHandler {
        RunAffectationHandler::new(
            Arc::new(sample_registry()),
            classifier,
            Arc::new(history),
            strategy,
        )
    }

    fn answers_with(diagnosis: &[&str]) -> AnswerSet {
        AnswerSet::new(
            "Dupont",
            "Marie",
            Age::new(34).unwrap(),
            "Logement",
            diagnosis.iter().map(|d| d.to_string()).collect(),
            "Locataire",
            "20k-40k",
        )
        .unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn records_decoded_service_and_appends_once() {
        let history = InMemoryHistoryStore::new();
        let spy = Arc::new(SpyClassifier::new(vec![2, 0, 2, 2]));
        let handler = handler(spy.clone(), history.clone(), DiagnosisStrategy::FirstOnly);

        let record = handler
            .handle(RunAffectationCommand {
                answers: dupont_answers(),
            })
            .await
            .unwrap();

        assert_eq!(record.assigned_service(), "Hébergement");
        assert_eq!(spy.seen(), vec![vec![1, 1, 0, 1]]);
        assert_eq!(history.read_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn first_only_feeds_first_diagnosis_but_stores_all() {
        let history = InMemoryHistoryStore::new();
        let spy = Arc::new(SpyClassifier::new(vec![1, 0, 2, 2]));
        let handler = handler(spy.clone(), history.clone(), DiagnosisStrategy::FirstOnly);

        let record = handler
            .handle(RunAffectationCommand {
                answers: answers_with(&["Anxiété", "Dépression"]),
            })
            .await
            .unwrap();

        // Anxiété is code 0 in the diagnosis vocabulary
        assert_eq!(spy.seen(), vec![vec![1, 0, 0, 1]]);
        assert_eq!(record.assigned_service(), "Insertion professionnelle");
        assert_eq!(record.answers().diagnosis(), &["Anxiété", "Dépression"]);
    }

    #[tokio::test]
    async fn majority_vote_predicts_per_diagnosis() {
        let history = InMemoryHistoryStore::new();
        // Anxiété -> 1, Dépression -> 2, Schizophrénie -> 2
        let spy = Arc::new(SpyClassifier::new(vec![1, 2, 2, 0]));
        let handler = handler(spy.clone(), history, DiagnosisStrategy::MajorityVote);

        let record = handler
            .handle(RunAffectationCommand {
                answers: answers_with(&["Anxiété", "Dépression", "Schizophrénie"]),
            })
            .await
            .unwrap();

        assert_eq!(spy.seen().len(), 3);
        assert_eq!(record.assigned_service(), "Santé mentale");
    }

    #[tokio::test]
    async fn majority_vote_tie_goes_to_earliest_diagnosis() {
        let spy = Arc::new(SpyClassifier::new(vec![1, 2, 0, 0]));
        let handler = handler(spy, InMemoryHistoryStore::new(), DiagnosisStrategy::MajorityVote);

        let record = handler
            .handle(RunAffectationCommand {
                answers: answers_with(&["Dépression", "Anxiété"]),
            })
            .await
            .unwrap();

        assert_eq!(record.assigned_service(), "Santé mentale");
    }

    #[tokio::test]
    async fn unknown_category_writes_nothing() {
        let history = InMemoryHistoryStore::new();
        let handler = handler(
            Arc::new(SpyClassifier::new(vec![0, 0, 0, 0])),
            history.clone(),
            DiagnosisStrategy::FirstOnly,
        );
        let answers = AnswerSet::new(
            "Dupont",
            "Marie",
            Age::new(34).unwrap(),
            "Logement",
            vec!["Dépression".to_string()],
            "Yourte",
            "20k-40k",
        )
        .unwrap();

        let err = handler
            .handle(RunAffectationCommand { answers })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AffectationError::Encoding(EncodingError::UnknownCategory {
                field: CategoricalField::HousingType,
                ..
            })
        ));
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_extra_diagnosis_is_rejected_before_predicting() {
        let history = InMemoryHistoryStore::new();
        let spy = Arc::new(SpyClassifier::new(vec![0, 0, 0, 0]));
        let handler = handler(spy.clone(), history.clone(), DiagnosisStrategy::FirstOnly);

        let err = handler
            .handle(RunAffectationCommand {
                answers: answers_with(&["Dépression", "Grippe"]),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AffectationError::Encoding(EncodingError::UnknownCategory {
                field: CategoricalField::Diagnosis,
                ref value,
            }) if value == "Grippe"
        ));
        assert!(spy.seen().is_empty());
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn out_of_range_prediction_is_unknown_code() {
        let history = InMemoryHistoryStore::new();
        let handler = handler(
            Arc::new(SpyClassifier::new(vec![9, 9, 9, 9])),
            history.clone(),
            DiagnosisStrategy::FirstOnly,
        );

        let err = handler
            .handle(RunAffectationCommand {
                answers: dupont_answers(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AffectationError::Encoding(EncodingError::UnknownCode { code: 9, .. })
        ));
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn inference_failure_writes_nothing() {
        let history = InMemoryHistoryStore::new();
        let handler = handler(
            Arc::new(FailingClassifier),
            history.clone(),
            DiagnosisStrategy::FirstOnly,
        );

        let err = handler
            .handle(RunAffectationCommand {
                answers: dupont_answers(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AffectationError::ModelInference(_)));
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn store_failure_returns_the_unsaved_record() {
        let history = InMemoryHistoryStore::new();
        history.set_unavailable(true);
        let handler = handler(
            Arc::new(SpyClassifier::new(vec![0, 0, 0, 0])),
            history,
            DiagnosisStrategy::FirstOnly,
        );

        let err = handler
            .handle(RunAffectationCommand {
                answers: dupont_answers(),
            })
            .await
            .unwrap_err();

        let record = err.unsaved_record().unwrap();
        assert_eq!(record.assigned_service(), "Hébergement");
        assert_eq!(record.answers(), &dupont_answers());
    }
}
