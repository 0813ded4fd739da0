//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000", env = "LCA_PORT")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1", env = "LCA_HOST")]
    pub host: String,

    /// SQLite database file (defaults to <project>/.lca/lca.db)
    #[arg(long, env = "LCA_DB")]
    pub db: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to <project>/.lca/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, project_dir: &Path) -> Result<()> {
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| super::default_db_path(project_dir));
    let pool = lca_db::init_pool(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    let pool = Arc::new(pool);

    println!();
    println!(
        "  {} {}",
        "LCA".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}      http://{}:{}",
        "Health".green(),
        args.host,
        args.port
    );
    println!(
        "  {}         http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    {}",
        "Database".green(),
        db_path.display()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    lca_web::run_server(pool, &args.host, args.port).await?;

    Ok(())
}
