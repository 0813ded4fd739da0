//! Analysis and status route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lca_core::analysis::{
    self,
    model::{AnalysisRecord, AnalysisResponse, ContractStatus},
};

use super::error_response;
use crate::state::AppState;

pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisRecord>, (StatusCode, String)> {
    let record = analysis::get_analysis(&state.db, &id).map_err(error_response)?;
    Ok(Json(record))
}

/// PUT /api/contracts/{id}/analysis - Attach an externally produced analysis.
pub async fn put_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AnalysisResponse>,
) -> Result<Json<AnalysisRecord>, (StatusCode, String)> {
    let record = analysis::record_analysis(&state.db, &id, req).map_err(error_response)?;
    Ok(Json(record))
}

/// GET /api/status/{id} - Polled by the upload page until progress hits 100.
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContractStatus>, (StatusCode, String)> {
    let status = analysis::contract_status(&state.db, &id).map_err(error_response)?;
    Ok(Json(status))
}
