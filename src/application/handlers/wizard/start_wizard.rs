//! StartWizardHandler - opens a fresh wizard session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardSession;
use crate::ports::WizardSessionStore;

use super::WizardError;

/// Handler for starting wizard sessions.
pub struct StartWizardHandler {
    sessions: Arc<dyn WizardSessionStore>,
}

impl StartWizardHandler {
    pub fn new(sessions: Arc<dyn WizardSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self) -> Result<WizardSession, WizardError> {
        let session = WizardSession::start(SessionId::new());
        self.sessions.save(&session).await?;
        tracing::info!(session_id = %session.id(), "Wizard session started");
        Ok(session)
    }
}
