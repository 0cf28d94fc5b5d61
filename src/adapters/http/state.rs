//! Shared application state handed to every route.

use std::sync::Arc;

use crate::application::{
    FinalizeWizardHandler, GetHistoryHandler, GetHistoryOverviewHandler, GetWizardHandler,
    RestartWizardHandler, RunAffectationHandler, StartWizardHandler, SubmitAnswerHandler,
};
use crate::domain::affectation::DiagnosisStrategy;
use crate::domain::model::EncodingRegistry;
use crate::ports::{Classifier, HistoryStore, WizardSessionStore};

/// Dependencies of the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<EncodingRegistry>,
    pub sessions: Arc<dyn WizardSessionStore>,
    pub history: Arc<dyn HistoryStore>,
    pipeline: Arc<RunAffectationHandler>,
}

impl AppState {
    pub fn new(
        registry: Arc<EncodingRegistry>,
        classifier: Arc<dyn Classifier>,
        sessions: Arc<dyn WizardSessionStore>,
        history: Arc<dyn HistoryStore>,
        strategy: DiagnosisStrategy,
    ) -> Self {
        let pipeline = Arc::new(RunAffectationHandler::new(
            registry.clone(),
            classifier,
            history.clone(),
            strategy,
        ));
        Self {
            registry,
            sessions,
            history,
            pipeline,
        }
    }

    pub fn start_wizard_handler(&self) -> StartWizardHandler {
        StartWizardHandler::new(self.sessions.clone())
    }

    pub fn get_wizard_handler(&self) -> GetWizardHandler {
        GetWizardHandler::new(self.sessions.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(
            self.sessions.clone(),
            self.registry.clone(),
            self.pipeline.clone(),
        )
    }

    pub fn restart_wizard_handler(&self) -> RestartWizardHandler {
        RestartWizardHandler::new(self.sessions.clone())
    }

    pub fn finalize_wizard_handler(&self) -> FinalizeWizardHandler {
        FinalizeWizardHandler::new(self.sessions.clone(), self.pipeline.clone())
    }

    pub fn get_history_handler(&self) -> GetHistoryHandler {
        GetHistoryHandler::new(self.history.clone())
    }

    pub fn get_history_overview_handler(&self) -> GetHistoryOverviewHandler {
        GetHistoryOverviewHandler::new(self.history.clone())
    }
}
