//! RestartWizardHandler - clears a session back to its first step.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardSession;
use crate::ports::WizardSessionStore;

use super::WizardError;

/// Command to restart a wizard session.
#[derive(Debug, Clone)]
pub struct RestartWizardCommand {
    pub session_id: SessionId,
}

/// Handler for restarting wizard sessions.
///
/// Restarting never touches the history: a record already appended stays.
pub struct RestartWizardHandler {
    sessions: Arc<dyn WizardSessionStore>,
}

impl RestartWizardHandler {
    pub fn new(sessions: Arc<dyn WizardSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: RestartWizardCommand) -> Result<WizardSession, WizardError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(WizardError::SessionNotFound(cmd.session_id))?;

        session.restart();
        self.sessions.save(&session).await?;

        tracing::debug!(session_id = %session.id(), "Wizard session restarted");
        Ok(session)
    }
}
