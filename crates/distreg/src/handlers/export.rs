//! Spreadsheet export handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use distreg_core::export::{build_workbook, EXPORT_FILE_NAME};

use crate::{handlers::AppError, state::AppState};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export both tables as a two-sheet workbook (GET /export-excel).
///
/// The artifact is written to the configured path and also returned as the
/// response body, offered as an attachment download.
pub async fn export_excel(State(state): State<AppState>) -> Result<Response, AppError> {
    let distributors = state.distributor_repo.list_distributors().await?;
    let answers = state.answer_repo.list_answers().await?;

    let bytes = build_workbook(&distributors, &answers)?;

    tokio::fs::write(state.export_path.as_ref(), &bytes).await?;

    tracing::info!(
        path = %state.export_path.display(),
        distributors = distributors.len(),
        answers = answers.len(),
        "Exported spreadsheet"
    );

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
