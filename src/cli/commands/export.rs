//! Export command - Dump a saved Q-table to CSV

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{adapters::JsonRepository, export::write_table_csv, ports::TableRepository};

#[derive(Parser, Debug)]
#[command(about = "Export a saved Q-table to CSV")]
pub struct ExportArgs {
    /// Path to the saved Q-table (JSON)
    pub table: PathBuf,

    /// Output CSV file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let table = JsonRepository::new().load(&args.table)?;
    write_table_csv(&table, &args.output)?;
    println!(
        "Exported {} states to {}",
        table.len(),
        args.output.display()
    );
    Ok(())
}
