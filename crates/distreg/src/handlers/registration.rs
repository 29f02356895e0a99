//! Handlers for the two-step submission workflow.
//!
//! Step one creates the distributor record and redirects to the
//! questionnaire with the generated id; step two records the answer batch.

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};

use distreg_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::{
    handlers::pages::HtmlTemplate,
    models::{AnswersForm, RegistrationForm},
    state::AppState,
};

/// Error response with message (for form validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "Submission error");
    (status, msg)
}

/// Error response for repository failures, keyed off the error kind.
fn repo_error_response(err: RepositoryError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(repository_error_to_status_code(&err))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, err.to_string())
}

/// Confirmation page shown after the questionnaire is recorded.
#[derive(Template)]
#[template(path = "confirmation.html")]
struct ConfirmationTemplate {}

/// Create a distributor from the registration form (POST /submit).
///
/// On success redirects (303) to the questions page with the new id as a
/// query parameter.
pub async fn submit(
    State(state): State<AppState>,
    form_result: Result<Form<RegistrationForm>, FormRejection>,
) -> Result<Redirect, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let new = payload.into_new_distributor();
    new.validate()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let distributor = state
        .distributor_repo
        .create_distributor(&new)
        .await
        .map_err(repo_error_response)?;

    tracing::info!(
        distributor_id = %distributor.id,
        name = %distributor.distributor_name,
        "Registered distributor"
    );

    Ok(Redirect::to(&format!(
        "/questions.html?distributor_id={}",
        distributor.id
    )))
}

/// Record a questionnaire submission (POST /submit-answers).
///
/// Returns the static confirmation page. An unknown distributor id is a 404
/// and persists nothing.
pub async fn submit_answers(
    State(state): State<AppState>,
    form_result: Result<Form<AnswersForm>, FormRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let answers = payload.answers();

    state
        .answer_repo
        .record_answers(payload.distributor_id, &answers)
        .await
        .map_err(repo_error_response)?;

    tracing::info!(
        distributor_id = %payload.distributor_id,
        count = answers.len(),
        "Recorded survey answers"
    );

    Ok(HtmlTemplate(ConfirmationTemplate {}))
}
