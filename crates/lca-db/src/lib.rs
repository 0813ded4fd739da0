//! LCA Database Layer
//!
//! SQLite persistence for contracts and their attached analyses.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

use std::path::Path;

/// Open (or create) the database at `path` and bring its schema up to date.
pub fn init_pool(path: &Path) -> DbResult<DbPool> {
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}

/// In-memory database with the schema applied. Used by tests.
pub fn init_memory_pool() -> DbResult<DbPool> {
    let pool = DbPool::in_memory()?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
