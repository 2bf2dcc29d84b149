//! # craftledger: COGS Report CLI
//!
//! Thin presentation layer over the calculation engine and the settings
//! store. Engine inputs come from the store (`piece`), JSON input files
//! (`labor`, `multi`, `recipe`), or flags (`cogs`); `catalog` and
//! `seed` maintain the stored documents.

mod commands;
mod defaults;

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use commands::{catalog, cogs, labor, multi, piece, recipe, seed, CommandLine, Commands};
use craftledger_db::{Store, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    // Logs go to stderr so reports stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Piece { name } => {
            let store = open_store(cli.db).await?;
            piece::run(&store, name, cli.json).await
        }
        Commands::Labor {
            employees,
            allocations,
        } => labor::run(&employees, allocations, cli.json),
        Commands::Cogs {
            purchase,
            shipping,
            labor,
            quantity,
        } => cogs::run(purchase, shipping, labor, quantity, cli.json),
        Commands::Multi {
            products,
            shipping,
            labor,
        } => multi::run(&products, shipping, labor, cli.json),
        Commands::Recipe { recipe } => recipe::run(&recipe, cli.json),
        Commands::Catalog { action } => {
            let store = open_store(cli.db).await?;
            catalog::run(&store, action, cli.json).await
        }
        Commands::Seed => {
            let store = open_store(cli.db).await?;
            seed::run(&store).await
        }
    }
}

/// Opens the settings store at the given path, or at the platform's
/// per-user data directory when none is given.
async fn open_store(db: Option<PathBuf>) -> anyhow::Result<Store> {
    let path = match db {
        Some(path) => path,
        None => default_db_path()?,
    };

    let store = Store::new(StoreConfig::new(&path))
        .await
        .with_context(|| format!("opening settings store at {}", path.display()))?;
    Ok(store)
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "craftledger", "craftledger")
        .context("could not determine a data directory for this platform")?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;
    Ok(data_dir.join("craftledger.db"))
}
