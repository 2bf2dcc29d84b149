//! Command-line surface for the report binary.

pub mod catalog;
pub mod cogs;
pub mod labor;
pub mod multi;
pub mod piece;
pub mod recipe;
pub mod seed;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "craftledger")]
#[command(about = "COGS reports for small production businesses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the settings database (default: platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON instead of a formatted report
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-piece COGS report from the stored studio data
    #[command(alias = "p")]
    Piece {
        /// Catalog piece to report on (default: every named piece)
        name: Option<String>,
    },
    /// Labor breakdown for a list of employees
    #[command(alias = "l")]
    Labor {
        /// JSON file holding the employee list
        employees: PathBuf,
        /// JSON file assigning employee labor to products
        #[arg(long)]
        allocations: Option<PathBuf>,
    },
    /// Simple COGS from purchase, shipping, and labor costs
    #[command(alias = "c")]
    Cogs {
        #[arg(long)]
        purchase: f64,
        #[arg(long)]
        shipping: f64,
        #[arg(long)]
        labor: f64,
        /// Units produced, for a per-unit figure
        #[arg(long)]
        quantity: Option<f64>,
    },
    /// Multi-product COGS with shared shipping and labor
    #[command(alias = "m")]
    Multi {
        /// JSON file holding the product lines
        products: PathBuf,
        #[arg(long)]
        shipping: f64,
        #[arg(long)]
        labor: f64,
    },
    /// Cost a product recipe from its ingredient list
    #[command(alias = "r")]
    Recipe {
        /// JSON file holding the recipe
        recipe: PathBuf,
    },
    /// Manage the bisque piece catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Write starter settings for any missing keys
    Seed,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Add a piece to the catalog
    Add {
        /// Display name for the piece
        name: String,
        /// Wholesale cost paid to the supplier
        #[arg(long)]
        cost: f64,
    },
    /// List the named catalog pieces
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Reads and deserializes a JSON input file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Prints any serializable result as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
