//! hopper CLI - Tooling around the lane-crossing Q-learning agent
//!
//! The game loop drives the agent through the library API; this CLI covers
//! the offline side:
//! - Inspecting a trained Q-table
//! - Exporting a table to CSV for analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hopper")]
#[command(version, about = "Tooling for trained lane-crossing Q-tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a saved Q-table
    Inspect(hopper::cli::commands::inspect::InspectArgs),

    /// Export a saved Q-table to CSV
    Export(hopper::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => hopper::cli::commands::inspect::execute(args),
        Commands::Export(args) => hopper::cli::commands::export::execute(args),
    }
}
