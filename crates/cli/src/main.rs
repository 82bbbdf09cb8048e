//! Dresshaus CLI - Catalog seeding and data inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog with demo products
//! dh-cli seed catalog
//!
//! # Seed into a specific data directory, replacing existing products
//! dh-cli seed catalog --data-dir ./data --force
//!
//! # Show record counts per collection
//! dh-cli stats
//! ```
//!
//! # Commands
//!
//! - `seed catalog` - Seed the product catalog with demo data
//! - `stats` - Show record counts for every collection

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dh-cli")]
#[command(author, version, about = "Dresshaus CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed collections with demo data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Show record counts for every collection
    Stats {
        /// Data directory holding the collection files
        #[arg(long, default_value = "data")]
        data_dir: String,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the product catalog with demo products
    Catalog {
        /// Data directory holding the collection files
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Replace existing products instead of refusing to overwrite
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Catalog { data_dir, force } => commands::seed::catalog(&data_dir, force),
        },
        Commands::Stats { data_dir } => commands::stats::collections(&data_dir),
    }
}
