//! Analyses attached to stored contracts.
//!
//! The service does not produce analyses itself. They are supplied by a
//! reviewer or an external tool and stored next to the contract they describe.

pub mod model;

use crate::contract;
use crate::error::{LcaError, LcaResult};
use lca_db::queries::analyses::{self as queries, AnalysisRow};
use lca_db::{DbError, DbPool};
use model::{AnalysisRecord, AnalysisResponse, AnalysisStatus, ContractStatus};

/// Attach an analysis to a contract, replacing any previous one.
pub fn record_analysis(
    pool: &DbPool,
    contract_id: &str,
    analysis: AnalysisResponse,
) -> LcaResult<AnalysisRecord> {
    contract::ensure_exists(pool, contract_id)?;

    let row = AnalysisRow {
        contract_id: contract_id.to_string(),
        summary: analysis.summary,
        risks: serde_json::to_string(&analysis.risks)?,
        recommendations: serde_json::to_string(&analysis.recommendations)?,
        recorded_at: crate::now_rfc3339(),
    };
    queries::upsert_analysis(pool, &row)?;

    tracing::info!(contract_id, "Recorded analysis");

    get_analysis(pool, contract_id)
}

/// Get the analysis attached to a contract.
pub fn get_analysis(pool: &DbPool, contract_id: &str) -> LcaResult<AnalysisRecord> {
    contract::ensure_exists(pool, contract_id)?;

    let row = queries::get_analysis(pool, contract_id).map_err(|e| match e {
        DbError::NotFound(_) => LcaError::AnalysisNotFound(contract_id.to_string()),
        e => LcaError::Database(e),
    })?;
    AnalysisRecord::from_row(row)
}

/// Report whether a contract has been analyzed.
pub fn contract_status(pool: &DbPool, contract_id: &str) -> LcaResult<ContractStatus> {
    contract::ensure_exists(pool, contract_id)?;

    let status = if queries::has_analysis(pool, contract_id)? {
        AnalysisStatus::Analyzed
    } else {
        AnalysisStatus::Pending
    };
    Ok(ContractStatus::new(contract_id, status))
}
