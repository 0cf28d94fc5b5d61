//! FinalizeWizardHandler - (re)runs the pipeline for a session on the result step.
//!
//! Used after a pipeline failure left the session on the result step without
//! a record. Finalizing a session that already has its record returns it
//! unchanged.
//!
//! Once the history append has succeeded, saving the session is retried with
//! the record held in memory. A session left without its record after that
//! would be finalized again and append a second row.

use std::sync::Arc;

use crate::application::handlers::affectation::{RunAffectationCommand, RunAffectationHandler};
use crate::domain::foundation::SessionId;
use crate::domain::wizard::WizardSession;
use crate::ports::WizardSessionStore;

use super::WizardError;

/// Attempts at saving a session whose record is already in the history.
const OUTCOME_SAVE_ATTEMPTS: usize = 3;

/// Command to finalize a wizard session.
#[derive(Debug, Clone)]
pub struct FinalizeWizardCommand {
    pub session_id: SessionId,
}

/// Handler for finalizing wizard sessions.
pub struct FinalizeWizardHandler {
    sessions: Arc<dyn WizardSessionStore>,
    pipeline: Arc<RunAffectationHandler>,
}

impl FinalizeWizardHandler {
    pub fn new(sessions: Arc<dyn WizardSessionStore>, pipeline: Arc<RunAffectationHandler>) -> Self {
        Self { sessions, pipeline }
    }

    pub async fn handle(&self, cmd: FinalizeWizardCommand) -> Result<WizardSession, WizardError> {
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(WizardError::SessionNotFound(cmd.session_id))?;

        if session.outcome().is_some() {
            return Ok(session);
        }
        if !session.awaiting_outcome() {
            return Err(WizardError::NotAtResult {
                session: Box::new(session),
            });
        }
        settle_outcome(session, &self.pipeline, self.sessions.as_ref()).await
    }
}

/// Runs the pipeline for a session awaiting its outcome and stores the result.
///
/// On failure the session is returned inside the error, still awaiting.
pub(super) async fn settle_outcome(
    mut session: WizardSession,
    pipeline: &RunAffectationHandler,
    sessions: &dyn WizardSessionStore,
) -> Result<WizardSession, WizardError> {
    let Some(answers) = session.answer_set() else {
        return Err(WizardError::NotAtResult {
            session: Box::new(session),
        });
    };

    match pipeline.handle(RunAffectationCommand { answers }).await {
        Ok(record) => {
            session
                .record_outcome(record)
                .map_err(|e| WizardError::SessionStore(e.into()))?;
            save_completed(&session, sessions).await?;
            tracing::info!(session_id = %session.id(), "Wizard session completed");
            Ok(session)
        }
        Err(source) => {
            tracing::warn!(
                session_id = %session.id(),
                code = %source.code(),
                error = %source,
                "Affectation pipeline failed"
            );
            Err(WizardError::Affectation {
                session: Box::new(session),
                source,
            })
        }
    }
}

async fn save_completed(
    session: &WizardSession,
    sessions: &dyn WizardSessionStore,
) -> Result<(), WizardError> {
    let mut attempt = 1;
    loop {
        match sessions.save(session).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt < OUTCOME_SAVE_ATTEMPTS => {
                tracing::warn!(
                    session_id = %session.id(),
                    attempt,
                    error = %err,
                    "Saving completed session failed, retrying"
                );
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    session_id = %session.id(),
                    error = %err,
                    "Completed session not saved; its record is already in the history"
                );
                return Err(err.into());
            }
        }
    }
}
