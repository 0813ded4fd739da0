//! Contract route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lca_core::contract::{
    self,
    model::{Contract, ContractRecord, ContractSource},
};

use super::error_response;
use crate::state::AppState;

pub async fn list_contracts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContractRecord>>, (StatusCode, String)> {
    let contracts = contract::list_contracts(&state.db).map_err(error_response)?;
    Ok(Json(contracts))
}

pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContractRecord>, (StatusCode, String)> {
    let record = contract::get_contract(&state.db, &id).map_err(error_response)?;
    Ok(Json(record))
}

pub async fn create_contract(
    State(state): State<AppState>,
    Json(req): Json<Contract>,
) -> Result<(StatusCode, Json<ContractRecord>), (StatusCode, String)> {
    let record = contract::create_contract(&state.db, req, ContractSource::Json, None)
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    contract::delete_contract(&state.db, &id).map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
