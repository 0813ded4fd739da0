//! Contract related database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::{params, Row};

/// Contract row from database.
///
/// `parties` holds a JSON array; decoding is left to the domain layer.
#[derive(Debug, Clone)]
pub struct ContractRow {
    pub id: String,
    pub title: String,
    pub parties: String,
    pub content: String,
    pub source: String,
    pub file_name: Option<String>,
    pub created_at: String,
}

impl ContractRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            parties: row.get(2)?,
            content: row.get(3)?,
            source: row.get(4)?,
            file_name: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

/// Insert a new contract.
pub fn create_contract(pool: &DbPool, row: &ContractRow) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO contracts (id, title, parties, content, source, file_name, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                row.id,
                row.title,
                row.parties,
                row.content,
                row.source,
                row.file_name,
                row.created_at
            ],
        )?;
        Ok(())
    })
}

/// Get a contract by ID.
pub fn get_contract(pool: &DbPool, id: &str) -> DbResult<ContractRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, title, parties, content, source, file_name, created_at
             FROM contracts WHERE id = ?1",
            params![id],
            ContractRow::from_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Contract: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// List all contracts, newest first.
pub fn list_contracts(pool: &DbPool) -> DbResult<Vec<ContractRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, title, parties, content, source, file_name, created_at
             FROM contracts
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([], ContractRow::from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Check whether a contract exists.
pub fn contract_exists(pool: &DbPool, id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM contracts WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    })
}

/// Delete a contract. Its analysis goes with it (ON DELETE CASCADE).
///
/// Returns `NotFound` when no row matched.
pub fn delete_contract(pool: &DbPool, id: &str) -> DbResult<()> {
    pool.with_conn(|conn| {
        let affected = conn.execute("DELETE FROM contracts WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(DbError::NotFound(format!("Contract: {}", id)));
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_memory_pool;

    fn sample(id: &str, created_at: &str) -> ContractRow {
        ContractRow {
            id: id.to_string(),
            title: "NDA".to_string(),
            parties: r#"["Acme","Beta"]"#.to_string(),
            content: "...".to_string(),
            source: "json".to_string(),
            file_name: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let pool = init_memory_pool().unwrap();
        create_contract(&pool, &sample("c1", "2026-01-01T00:00:00Z")).unwrap();

        let row = get_contract(&pool, "c1").unwrap();
        assert_eq!(row.title, "NDA");
        assert_eq!(row.parties, r#"["Acme","Beta"]"#);
        assert!(row.file_name.is_none());
    }

    #[test]
    fn test_get_missing() {
        let pool = init_memory_pool().unwrap();
        let err = get_contract(&pool, "nope").unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn test_list_newest_first() {
        let pool = init_memory_pool().unwrap();
        create_contract(&pool, &sample("old", "2026-01-01T00:00:00Z")).unwrap();
        create_contract(&pool, &sample("new", "2026-02-01T00:00:00Z")).unwrap();

        let ids: Vec<String> = list_contracts(&pool).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_delete() {
        let pool = init_memory_pool().unwrap();
        create_contract(&pool, &sample("c1", "2026-01-01T00:00:00Z")).unwrap();

        delete_contract(&pool, "c1").unwrap();
        assert!(!contract_exists(&pool, "c1").unwrap());
        assert!(matches!(delete_contract(&pool, "c1"), Err(DbError::NotFound(_))));
    }
}
