//! HTTP handlers for wizard endpoints.
//!
//! These handlers connect Axum routes to the wizard command and query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::application::{
    FinalizeWizardCommand, GetWizardQuery, RestartWizardCommand, SubmitAnswerCommand,
};
use crate::domain::foundation::SessionId;

use super::dto::{SubmitAnswerRequest, WizardView};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid session ID format"))
}

/// POST /api/wizard/sessions
pub async fn start_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WizardView>), ApiError> {
    let session = state
        .start_wizard_handler()
        .handle()
        .await
        .map_err(|e| ApiError::from_wizard(e, &state.registry))?;

    Ok((
        StatusCode::CREATED,
        Json(WizardView::from_session(&session, &state.registry)),
    ))
}

/// GET /api/wizard/sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .get_wizard_handler()
        .handle(GetWizardQuery { session_id })
        .await
        .map_err(|e| ApiError::from_wizard(e, &state.registry))?;

    Ok(Json(WizardView::from_session(&session, &state.registry)))
}

/// POST /api/wizard/sessions/:id/answers
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<WizardView>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let session = state
                .get_wizard_handler()
                .handle(GetWizardQuery { session_id })
                .await
                .map_err(|e| ApiError::from_wizard(e, &state.registry))?;
            tracing::warn!(
                session_id = %session_id,
                error = %rejection.body_text(),
                "Unreadable answer body"
            );
            return Err(ApiError::unreadable_answer(
                &rejection,
                &session,
                &state.registry,
            ));
        }
    };
    let session = state
        .submit_answer_handler()
        .handle(SubmitAnswerCommand {
            session_id,
            step: request.step,
            answer: request.value,
        })
        .await
        .map_err(|e| ApiError::from_wizard(e, &state.registry))?;

    Ok(Json(WizardView::from_session(&session, &state.registry)))
}

/// POST /api/wizard/sessions/:id/restart
pub async fn restart_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .restart_wizard_handler()
        .handle(RestartWizardCommand { session_id })
        .await
        .map_err(|e| ApiError::from_wizard(e, &state.registry))?;

    Ok(Json(WizardView::from_session(&session, &state.registry)))
}

/// POST /api/wizard/sessions/:id/finalize
pub async fn finalize_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .finalize_wizard_handler()
        .handle(FinalizeWizardCommand { session_id })
        .await
        .map_err(|e| ApiError::from_wizard(e, &state.registry))?;

    Ok(Json(WizardView::from_session(&session, &state.registry)))
}
