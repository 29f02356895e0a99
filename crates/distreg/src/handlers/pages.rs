use askama::Template;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use distreg_core::registration::QUESTION_COUNT;

/// Template wrapper that converts Askama templates into HTML responses.
///
/// Askama escapes interpolated values, so stored free text cannot inject
/// markup into the rendered pages.
pub(crate) struct HtmlTemplate<T>(pub(crate) T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Registration form template.
#[derive(Template)]
#[template(path = "form.html")]
struct IndexTemplate {}

/// Handler for the registration form page (GET /).
pub async fn index() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {})
}

/// Questionnaire template with one input per question.
#[derive(Template)]
#[template(path = "questions.html")]
struct QuestionsTemplate {
    distributor_id: Option<i64>,
    questions: Vec<u32>,
}

/// Query parameters for the questions page.
#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    /// Carried over from the registration redirect to link the two steps.
    pub distributor_id: Option<i64>,
}

/// Handler for the questionnaire page (GET /questions.html).
pub async fn questions(Query(query): Query<QuestionsQuery>) -> impl IntoResponse {
    HtmlTemplate(QuestionsTemplate {
        distributor_id: query.distributor_id,
        questions: (1..=QUESTION_COUNT).collect(),
    })
}
