//! GetWizardHandler - loads a wizard session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardSession;
use crate::ports::WizardSessionStore;

use super::WizardError;

/// Query for one wizard session.
#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub session_id: SessionId,
}

/// Handler for reading wizard sessions.
pub struct GetWizardHandler {
    sessions: Arc<dyn WizardSessionStore>,
}

impl GetWizardHandler {
    pub fn new(sessions: Arc<dyn WizardSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<WizardSession, WizardError> {
        self.sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or(WizardError::SessionNotFound(query.session_id))
    }
}
