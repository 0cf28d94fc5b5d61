//! Wizard command and query handlers.

mod errors;
mod evict_idle_sessions;
mod finalize_wizard;
mod get_wizard;
mod restart_wizard;
mod start_wizard;
mod submit_answer;

pub use errors::WizardError;
pub use evict_idle_sessions::EvictIdleSessionsHandler;
pub use finalize_wizard::{FinalizeWizardCommand, FinalizeWizardHandler};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use restart_wizard::{RestartWizardCommand, RestartWizardHandler};
pub use start_wizard::StartWizardHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::session::InMemoryWizardSessionStore;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::application::handlers::affectation::RunAffectationHandler;
    use crate::domain::affectation::DiagnosisStrategy;
    use crate::domain::model::registry::tests::sample_registry;
    use crate::domain::model::{EncodingRegistry, FeatureVector};
    use crate::ports::{Classifier, ModelInferenceError};

    /// Always predicts the first target class.
    pub(crate) struct FirstClass;

    impl Classifier for FirstClass {
        fn predict(&self, _features: &FeatureVector) -> Result<u32, ModelInferenceError> {
            Ok(0)
        }
    }

    pub(crate) struct Fixture {
        pub registry: Arc<EncodingRegistry>,
        pub sessions: InMemoryWizardSessionStore,
        pub history: InMemoryHistoryStore,
        pub pipeline: Arc<RunAffectationHandler>,
    }

    pub(crate) fn fixture() -> Fixture {
        let registry = Arc::new(sample_registry());
        let history = InMemoryHistoryStore::new();
        let pipeline = Arc::new(RunAffectationHandler::new(
            registry.clone(),
            Arc::new(FirstClass),
            Arc::new(history.clone()),
            DiagnosisStrategy::FirstOnly,
        ));
        Fixture {
            registry,
            sessions: InMemoryWizardSessionStore::new(),
            history,
            pipeline,
        }
    }
}
