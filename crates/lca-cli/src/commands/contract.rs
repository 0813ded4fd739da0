//! Contract inspection and import commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use lca_core::analysis;
use lca_core::contract::{self, model::ContractSource};
use lca_db::DbPool;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Subcommand)]
pub enum ContractCommands {
    /// List stored contracts
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a contract and its analysis, if any
    Show {
        /// Contract ID
        id: String,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Import a plain-text file as a contract
    Import {
        /// Text file to import
        file: PathBuf,

        /// Title (defaults to the file name without extension)
        #[arg(long)]
        title: Option<String>,

        /// Party to the contract (repeatable, order is kept)
        #[arg(long)]
        party: Vec<String>,
    },
}

pub fn execute(cmd: ContractCommands, project_dir: &Path) -> Result<()> {
    let db_path = super::default_db_path(project_dir);
    let pool = lca_db::init_pool(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    match cmd {
        ContractCommands::List { json } => list(&pool, json),
        ContractCommands::Show { id, json } => show(&pool, &id, json),
        ContractCommands::Import { file, title, party } => {
            let record = import(&pool, &file, title, party)?;
            println!(
                "{} Imported {} {}",
                "✓".green().bold(),
                record.contract.title.cyan(),
                format!("({})", record.id).dimmed()
            );
            Ok(())
        }
    }
}

fn list(pool: &DbPool, json: bool) -> Result<()> {
    let contracts = contract::list_contracts(pool)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contracts)?);
    } else {
        output::print_contracts_table(&contracts);
    }
    Ok(())
}

fn show(pool: &DbPool, id: &str, json: bool) -> Result<()> {
    let record = contract::get_contract(pool, id)?;
    let analysis = match analysis::get_analysis(pool, id) {
        Ok(a) => Some(a),
        Err(lca_core::LcaError::AnalysisNotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    if json {
        let value = serde_json::json!({
            "contract": record,
            "analysis": analysis,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        output::print_contract(&record);
        match &analysis {
            Some(a) => output::print_analysis(a),
            None => {
                println!();
                println!("{}", "No analysis recorded.".dimmed());
            }
        }
    }
    Ok(())
}

/// Read a text file from disk and store it as a contract.
pub fn import(
    pool: &DbPool,
    file: &Path,
    title: Option<String>,
    parties: Vec<String>,
) -> Result<contract::model::ContractRecord> {
    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    tracing::debug!(path = %file.display(), bytes = bytes.len(), "Importing contract file");

    let mut parsed = contract::contract_from_upload(&file_name, &bytes)?;
    if let Some(title) = title {
        parsed.title = title;
    }
    parsed.parties = parties;

    let stored_name = (!file_name.is_empty()).then_some(file_name.as_str());
    let record = contract::create_contract(pool, parsed, ContractSource::Upload, stored_name)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Consulting Agreement.txt");
        std::fs::write(&path, "The consultant agrees...").unwrap();

        let pool = lca_db::init_memory_pool().unwrap();
        let record = import(&pool, &path, None, vec!["Acme".into(), "Beta".into()]).unwrap();

        assert_eq!(record.contract.title, "Consulting Agreement");
        assert_eq!(record.contract.parties, vec!["Acme", "Beta"]);
        assert_eq!(record.file_name.as_deref(), Some("Consulting Agreement.txt"));
        assert_eq!(record.source, ContractSource::Upload);
    }

    #[test]
    fn test_import_title_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft-v3.txt");
        std::fs::write(&path, "Terms").unwrap();

        let pool = lca_db::init_memory_pool().unwrap();
        let record = import(&pool, &path, Some("Lease".into()), vec![]).unwrap();
        assert_eq!(record.contract.title, "Lease");
    }

    #[test]
    fn test_import_missing_file() {
        let pool = lca_db::init_memory_pool().unwrap();
        assert!(import(&pool, Path::new("/definitely/not/here.txt"), None, vec![]).is_err());
    }
}
