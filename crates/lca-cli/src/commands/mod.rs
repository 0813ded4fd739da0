//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod contract;
pub mod serve;

/// Legal Contract Analyzer - contract intake backend
#[derive(Parser)]
#[command(name = "lca")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true, env = "LCA_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Inspect and import stored contracts
    #[command(subcommand)]
    Contract(contract::ContractCommands),
}

impl Cli {
    /// Project directory, falling back to the current directory.
    pub fn project_dir(&self) -> PathBuf {
        self.project
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub async fn execute(self) -> Result<()> {
        let project_dir = self.project_dir();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &project_dir).await,
            Commands::Contract(cmd) => contract::execute(cmd, &project_dir),
        }
    }
}

/// Default database location inside a project directory.
pub fn default_db_path(project_dir: &std::path::Path) -> PathBuf {
    project_dir.join(".lca").join("lca.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["lca", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 8000);
                assert_eq!(args.host, "127.0.0.1");
                assert!(args.db.is_none());
                assert!(!args.log);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_import_with_parties() {
        let cli = Cli::try_parse_from([
            "lca", "contract", "import", "nda.txt", "--party", "Acme", "--party", "Beta",
        ])
        .unwrap();
        match cli.command {
            Commands::Contract(contract::ContractCommands::Import { file, party, title }) => {
                assert_eq!(file, PathBuf::from("nda.txt"));
                assert_eq!(party, vec!["Acme", "Beta"]);
                assert!(title.is_none());
            }
            _ => panic!("expected contract import"),
        }
    }

    #[test]
    fn test_default_db_path() {
        assert_eq!(
            default_db_path(std::path::Path::new("/srv/app")),
            PathBuf::from("/srv/app/.lca/lca.db")
        );
    }
}
