//! SubmitAnswerHandler - validates one answer and advances the wizard.
//!
//! When the answer completes the questionnaire, the affectation pipeline runs
//! right away and its record is attached to the session. It runs only on that
//! transition; later reads of the result step never re-run it.

use std::sync::Arc;

use crate::application::handlers::affectation::RunAffectationHandler;
use crate::domain::foundation::SessionId;
use crate::domain::model::EncodingRegistry;
use crate::domain::wizard::{RawAnswer, WizardSession, WizardStep};
use crate::ports::WizardSessionStore;

use super::finalize_wizard::settle_outcome;
use super::WizardError;

/// Command carrying one raw answer for the step the user was shown.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub answer: RawAnswer,
}

/// Handler for answer submissions.
pub struct SubmitAnswerHandler {
    sessions: Arc<dyn WizardSessionStore>,
    registry: Arc<EncodingRegistry>,
    pipeline: Arc<RunAffectationHandler>,
}

impl SubmitAnswerHandler {
    pub fn new(
        sessions: Arc<dyn WizardSessionStore>,
        registry: Arc<EncodingRegistry>,
        pipeline: Arc<RunAffectationHandler>,
    ) -> Self {
        Self {
            sessions,
            registry,
            pipeline,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<WizardSession, WizardError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(WizardError::SessionNotFound(cmd.session_id))?;

        if let Err(rejection) = session.submit(cmd.step, &cmd.answer, &self.registry) {
            tracing::warn!(
                session_id = %session.id(),
                step = ?rejection.step,
                reason = %rejection.reason,
                "Answer rejected"
            );
            return Err(WizardError::Rejected {
                session: Box::new(session),
                rejection,
            });
        }
        self.sessions.save(&session).await?;

        if session.awaiting_outcome() {
            session = settle_outcome(session, &self.pipeline, self.sessions.as_ref()).await?;
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::fixture;
    use crate::domain::wizard::session::tests::scenario_answers;
    use crate::domain::wizard::RejectionReason;
    use crate::ports::HistoryStore;

    async fn started(fx: &crate::application::handlers::wizard::test_support::Fixture) -> SessionId {
        let session = WizardSession::start(SessionId::new());
        fx.sessions.save(&session).await.unwrap();
        *session.id()
    }

    fn handler(fx: &crate::application::handlers::wizard::test_support::Fixture) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(
            Arc::new(fx.sessions.clone()),
            fx.registry.clone(),
            fx.pipeline.clone(),
        )
    }

    #[tokio::test]
    async fn valid_answer_advances_one_step() {
        let fx = fixture();
        let id = started(&fx).await;

        let session = handler(&fx)
            .handle(SubmitAnswerCommand {
                session_id: id,
                step: WizardStep::Name,
                answer: RawAnswer::text("Dupont"),
            })
            .await
            .unwrap();

        assert_eq!(session.step(), WizardStep::Surname);
        assert_eq!(session.answers().name.as_deref(), Some("Dupont"));
    }

    #[tokio::test]
    async fn invalid_answer_leaves_stored_session_unchanged() {
        let fx = fixture();
        let id = started(&fx).await;
        let handler = handler(&fx);
        for (step, answer) in scenario_answers().into_iter().take(2) {
            handler
                .handle(SubmitAnswerCommand {
                    session_id: id,
                    step,
                    answer,
                })
                .await
                .unwrap();
        }

        let err = handler
            .handle(SubmitAnswerCommand {
                session_id: id,
                step: WizardStep::Age,
                answer: RawAnswer::Integer(0),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WizardError::Rejected { .. }));
        assert_eq!(err.session().map(|s| s.step()), Some(WizardStep::Age));
        let stored = fx.sessions.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.step(), WizardStep::Age);
        assert!(stored.answers().age.is_none());
    }

    #[tokio::test]
    async fn stale_step_is_rejected() {
        let fx = fixture();
        let id = started(&fx).await;

        let err = handler(&fx)
            .handle(SubmitAnswerCommand {
                session_id: id,
                step: WizardStep::Surname,
                answer: RawAnswer::text("Marie"),
            })
            .await
            .unwrap_err();

        match err {
            WizardError::Rejected { rejection, .. } => assert_eq!(
                rejection.reason,
                RejectionReason::OutOfOrder {
                    submitted: WizardStep::Surname,
                    current: WizardStep::Name,
                }
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn completing_the_questionnaire_records_exactly_once() {
        let fx = fixture();
        let id = started(&fx).await;
        let handler = handler(&fx);

        let mut last = None;
        for (step, answer) in scenario_answers() {
            last = Some(
                handler
                    .handle(SubmitAnswerCommand {
                        session_id: id,
                        step,
                        answer,
                    })
                    .await
                    .unwrap(),
            );
        }

        let session = last.unwrap();
        assert_eq!(session.step(), WizardStep::Result);
        assert_eq!(
            session.outcome().map(|r| r.assigned_service()),
            Some("Hébergement")
        );
        assert_eq!(fx.history.read_all().await.unwrap().len(), 1);

        // Submitting again on the result step neither re-runs nor appends
        let err = handler
            .handle(SubmitAnswerCommand {
                session_id: id,
                step: WizardStep::Result,
                answer: RawAnswer::text(""),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::Rejected { .. }));
        assert_eq!(fx.history.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_failure_keeps_session_awaiting_outcome() {
        let fx = fixture();
        fx.history.set_unavailable(true);
        let id = started(&fx).await;
        let handler = handler(&fx);

        let mut outcome = None;
        for (step, answer) in scenario_answers() {
            outcome = Some(
                handler
                    .handle(SubmitAnswerCommand {
                        session_id: id,
                        step,
                        answer,
                    })
                    .await,
            );
        }

        let err = outcome.unwrap().unwrap_err();
        assert!(matches!(err, WizardError::Affectation { .. }));
        let stored = fx.sessions.find_by_id(&id).await.unwrap().unwrap();
        assert!(stored.awaiting_outcome());
    }
}
