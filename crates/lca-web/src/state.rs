//! Application state.

use lca_db::DbPool;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
}

impl AppState {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }
}
