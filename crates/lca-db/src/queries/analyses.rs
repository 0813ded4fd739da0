//! Analysis related database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::params;

/// Analysis row from database. `risks` and `recommendations` are JSON arrays.
#[derive(Debug, Clone)]
pub struct AnalysisRow {
    pub contract_id: String,
    pub summary: String,
    pub risks: String,
    pub recommendations: String,
    pub recorded_at: String,
}

/// Insert or replace the analysis attached to a contract.
pub fn upsert_analysis(pool: &DbPool, row: &AnalysisRow) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO analyses (contract_id, summary, risks, recommendations, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(contract_id) DO UPDATE SET
                summary = excluded.summary,
                risks = excluded.risks,
                recommendations = excluded.recommendations,
                recorded_at = excluded.recorded_at",
            params![
                row.contract_id,
                row.summary,
                row.risks,
                row.recommendations,
                row.recorded_at
            ],
        )?;
        Ok(())
    })
}

/// Get the analysis for a contract.
pub fn get_analysis(pool: &DbPool, contract_id: &str) -> DbResult<AnalysisRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT contract_id, summary, risks, recommendations, recorded_at
             FROM analyses WHERE contract_id = ?1",
            params![contract_id],
            |row| {
                Ok(AnalysisRow {
                    contract_id: row.get(0)?,
                    summary: row.get(1)?,
                    risks: row.get(2)?,
                    recommendations: row.get(3)?,
                    recorded_at: row.get(4)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DbError::NotFound(format!("Analysis for contract: {}", contract_id))
            }
            e => DbError::Connection(e),
        })
    })
}

/// Check whether a contract has an analysis attached.
pub fn has_analysis(pool: &DbPool, contract_id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM analyses WHERE contract_id = ?1",
            params![contract_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_memory_pool;
    use crate::queries::contracts::{self, ContractRow};

    fn seed_contract(pool: &DbPool, id: &str) {
        contracts::create_contract(
            pool,
            &ContractRow {
                id: id.to_string(),
                title: "Lease".to_string(),
                parties: "[]".to_string(),
                content: "terms".to_string(),
                source: "json".to_string(),
                file_name: None,
                created_at: "2026-01-01T00:00:00Z".to_string(),
            },
        )
        .unwrap();
    }

    fn analysis(contract_id: &str, summary: &str) -> AnalysisRow {
        AnalysisRow {
            contract_id: contract_id.to_string(),
            summary: summary.to_string(),
            risks: r#"["late fees"]"#.to_string(),
            recommendations: "[]".to_string(),
            recorded_at: "2026-01-02T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_upsert_replaces() {
        let pool = init_memory_pool().unwrap();
        seed_contract(&pool, "c1");

        upsert_analysis(&pool, &analysis("c1", "first")).unwrap();
        upsert_analysis(&pool, &analysis("c1", "second")).unwrap();

        let row = get_analysis(&pool, "c1").unwrap();
        assert_eq!(row.summary, "second");
        assert_eq!(row.risks, r#"["late fees"]"#);
    }

    #[test]
    fn test_upsert_requires_contract() {
        let pool = init_memory_pool().unwrap();
        let err = upsert_analysis(&pool, &analysis("ghost", "x")).unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
    }

    #[test]
    fn test_cascade_on_contract_delete() {
        let pool = init_memory_pool().unwrap();
        seed_contract(&pool, "c1");
        upsert_analysis(&pool, &analysis("c1", "ok")).unwrap();
        assert!(has_analysis(&pool, "c1").unwrap());

        contracts::delete_contract(&pool, "c1").unwrap();
        assert!(!has_analysis(&pool, "c1").unwrap());
    }
}
