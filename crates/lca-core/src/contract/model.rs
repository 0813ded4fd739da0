//! Contract domain models.

use lca_db::queries::contracts::ContractRow;
use serde::{Deserialize, Serialize};

use crate::error::LcaResult;

/// A legal agreement: its title, the parties bound by it and its text.
///
/// Only the shape is checked; empty strings and an empty party list are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub title: String,
    pub parties: Vec<String>,
    pub content: String,
}

/// How a contract entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractSource {
    Json,
    Upload,
}

impl ContractSource {
    /// Parse from string.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "upload" => Self::Upload,
            _ => Self::Json,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Upload => "upload",
        }
    }
}

/// A stored contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub id: String,
    #[serde(flatten)]
    pub contract: Contract,
    pub source: ContractSource,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_name: Option<String>,
    pub created_at: String,
}

impl ContractRecord {
    /// Create from database row.
    pub fn from_row(row: ContractRow) -> LcaResult<Self> {
        let parties: Vec<String> = serde_json::from_str(&row.parties)?;

        Ok(Self {
            id: row.id,
            contract: Contract {
                title: row.title,
                parties,
                content: row.content,
            },
            source: ContractSource::from_str(&row.source),
            file_name: row.file_name,
            created_at: row.created_at,
        })
    }
}

/// Returned after a file upload; `file_id` is the new contract's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub file_id: String,
    pub file_name: String,
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_round_trip() {
        let contract = Contract {
            title: "NDA".to_string(),
            parties: vec!["Acme".to_string(), "Beta".to_string()],
            content: "...".to_string(),
        };

        let json = serde_json::to_string(&contract).unwrap();
        let back: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contract);
        assert_eq!(back.parties, vec!["Acme", "Beta"]);
    }

    #[test]
    fn test_contract_rejects_missing_field() {
        let result = serde_json::from_str::<Contract>(r#"{"title":"NDA","content":"..."}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_contract_rejects_wrong_type() {
        let result =
            serde_json::from_str::<Contract>(r#"{"title":"NDA","parties":"Acme","content":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_flattens_contract_fields() {
        let record = ContractRecord {
            id: "c1".to_string(),
            contract: Contract {
                title: "Lease".to_string(),
                parties: vec![],
                content: String::new(),
            },
            source: ContractSource::Upload,
            file_name: Some("lease.txt".to_string()),
            created_at: "2026-01-01T00:00:00.000000Z".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["title"], "Lease");
        assert_eq!(value["source"], "upload");
        assert_eq!(value["file_name"], "lease.txt");
        assert!(value.get("contract").is_none());
    }

    #[test]
    fn test_from_row_rejects_corrupt_parties() {
        let row = ContractRow {
            id: "c1".to_string(),
            title: "t".to_string(),
            parties: "not json".to_string(),
            content: String::new(),
            source: "json".to_string(),
            file_name: None,
            created_at: String::new(),
        };
        assert!(ContractRecord::from_row(row).is_err());
    }
}
