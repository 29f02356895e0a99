//! JSON read endpoints over the stored tables.
//!
//! Each response is a flat array, one object per row, in storage order.

use axum::{extract::State, Json};

use distreg_core::registration::{Distributor, DistributorAnswer};

use crate::{handlers::AppError, state::AppState};

/// List all distributor records (GET /api/distributor-info).
pub async fn distributor_info(
    State(state): State<AppState>,
) -> Result<Json<Vec<Distributor>>, AppError> {
    let distributors = state.distributor_repo.list_distributors().await?;
    Ok(Json(distributors))
}

/// List all answer records (GET /api/distributor-answers).
pub async fn distributor_answers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DistributorAnswer>>, AppError> {
    let answers = state.answer_repo.list_answers().await?;
    Ok(Json(answers))
}
