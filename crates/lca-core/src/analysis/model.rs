//! Analysis domain models.

use lca_db::queries::analyses::AnalysisRow;
use serde::{Deserialize, Serialize};

use crate::error::LcaResult;

/// The outcome of reviewing a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// An analysis attached to a stored contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub contract_id: String,
    #[serde(flatten)]
    pub analysis: AnalysisResponse,
    pub recorded_at: String,
}

impl AnalysisRecord {
    /// Create from database row.
    pub fn from_row(row: AnalysisRow) -> LcaResult<Self> {
        Ok(Self {
            contract_id: row.contract_id,
            analysis: AnalysisResponse {
                summary: row.summary,
                risks: serde_json::from_str(&row.risks)?,
                recommendations: serde_json::from_str(&row.recommendations)?,
            },
            recorded_at: row.recorded_at,
        })
    }
}

/// Whether a contract has been analyzed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Analyzed,
}

impl AnalysisStatus {
    /// Progress percentage reported to polling clients.
    pub fn progress(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Analyzed => 100,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Analyzed => "analyzed",
        }
    }
}

/// Status report for one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStatus {
    pub contract_id: String,
    pub status: AnalysisStatus,
    pub progress: u8,
}

impl ContractStatus {
    pub fn new(contract_id: impl Into<String>, status: AnalysisStatus) -> Self {
        Self {
            contract_id: contract_id.into(),
            status,
            progress: status.progress(),
        }
    }
}
