//! Centralized error types for LCA.

use thiserror::Error;

/// Main error type for LCA operations.
#[derive(Error, Debug)]
pub enum LcaError {
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    #[error("Analysis not found for contract: {0}")]
    AnalysisNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upload too large: {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Database error: {0}")]
    Database(#[from] lca_db::DbError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for LCA operations.
pub type LcaResult<T> = Result<T, LcaError>;

impl LcaError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Whether this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContractNotFound(_)
                | Self::AnalysisNotFound(_)
                | Self::Database(lca_db::DbError::NotFound(_))
        )
    }
}
