//! Contract intake and storage.

pub mod model;

use std::path::Path;

use crate::error::{LcaError, LcaResult};
use lca_db::queries::contracts::{self as queries, ContractRow};
use lca_db::{DbError, DbPool};
use model::{Contract, ContractRecord, ContractSource};
use uuid::Uuid;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Title given to uploads whose file name has no usable stem.
pub const UNTITLED: &str = "Untitled contract";

/// Store a new contract.
pub fn create_contract(
    pool: &DbPool,
    contract: Contract,
    source: ContractSource,
    file_name: Option<&str>,
) -> LcaResult<ContractRecord> {
    let id = Uuid::new_v4().to_string();

    let row = ContractRow {
        id: id.clone(),
        title: contract.title,
        parties: serde_json::to_string(&contract.parties)?,
        content: contract.content,
        source: source.as_str().to_string(),
        file_name: file_name.map(str::to_string),
        created_at: crate::now_rfc3339(),
    };
    queries::create_contract(pool, &row)?;

    tracing::info!(contract_id = %id, source = source.as_str(), "Stored contract");

    get_contract(pool, &id)
}

/// Get a contract by ID.
pub fn get_contract(pool: &DbPool, id: &str) -> LcaResult<ContractRecord> {
    let row = queries::get_contract(pool, id).map_err(|e| not_found(e, id))?;
    ContractRecord::from_row(row)
}

/// List all contracts, newest first.
pub fn list_contracts(pool: &DbPool) -> LcaResult<Vec<ContractRecord>> {
    queries::list_contracts(pool)?
        .into_iter()
        .map(ContractRecord::from_row)
        .collect()
}

/// Delete a contract together with its analysis.
pub fn delete_contract(pool: &DbPool, id: &str) -> LcaResult<()> {
    queries::delete_contract(pool, id).map_err(|e| not_found(e, id))?;
    tracing::info!(contract_id = %id, "Deleted contract");
    Ok(())
}

/// Fail with `ContractNotFound` unless the contract exists.
pub fn ensure_exists(pool: &DbPool, id: &str) -> LcaResult<()> {
    if queries::contract_exists(pool, id)? {
        Ok(())
    } else {
        Err(LcaError::ContractNotFound(id.to_string()))
    }
}

/// Build a contract from an uploaded plain-text file.
///
/// The title is the file name without directory or extension; parties are
/// left empty since a raw text file does not name them in a structured way.
pub fn contract_from_upload(file_name: &str, bytes: &[u8]) -> LcaResult<Contract> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(LcaError::PayloadTooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| LcaError::validation("Uploaded file is not valid UTF-8 text"))?;
    let text = text.trim_start_matches('\u{feff}');

    if text.trim().is_empty() {
        return Err(LcaError::validation("Uploaded file is empty"));
    }

    Ok(Contract {
        title: title_from_file_name(file_name),
        parties: Vec::new(),
        content: text.to_string(),
    })
}

/// Derive a contract title from an uploaded file name.
pub fn title_from_file_name(file_name: &str) -> String {
    // Browsers on Windows may send the full client path.
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);

    Path::new(base)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

fn not_found(err: DbError, id: &str) -> LcaError {
    match err {
        DbError::NotFound(_) => LcaError::ContractNotFound(id.to_string()),
        e => LcaError::Database(e),
    }
}
