//! ShrimpTrack CLI - Database seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Create tables and insert the demo dataset
//! st-cli seed
//!
//! # Drop and recreate everything first
//! st-cli seed --reset
//! ```
//!
//! The mock API serves fixtures from memory and never touches the database;
//! the seed exists so the same dataset is available to anything that does.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(author, version, about = "ShrimpTrack CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with the demo dataset
    Seed {
        /// Drop and recreate tables before inserting
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { reset } => commands::seed::run(reset).await?,
    }
    Ok(())
}
