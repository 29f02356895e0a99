use askama::Template;
use axum::{extract::State, response::IntoResponse};

use distreg_core::registration::{Distributor, DistributorAnswer};

use crate::{
    handlers::{pages::HtmlTemplate, AppError},
    state::AppState,
};

/// Full dump of both tables as HTML.
#[derive(Template)]
#[template(path = "submissions.html")]
struct SubmissionsTemplate {
    distributors: Vec<Distributor>,
    answers: Vec<DistributorAnswer>,
}

/// Handler for the submissions overview (GET /view-submissions).
///
/// Re-reads the store on every call; both tables are rendered whole.
pub async fn view_submissions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let distributors = state.distributor_repo.list_distributors().await?;
    let answers = state.answer_repo.list_answers().await?;

    Ok(HtmlTemplate(SubmissionsTemplate {
        distributors,
        answers,
    }))
}
