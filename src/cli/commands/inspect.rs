//! Inspect command - Summarize a saved Q-table

use std::{collections::HashMap, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    action::Action,
    adapters::JsonRepository,
    cli::output,
    ports::TableRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a saved Q-table")]
pub struct InspectArgs {
    /// Path to the saved Q-table (JSON)
    pub table: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let table = JsonRepository::new().load(&args.table)?;

    output::print_section(&format!("Q-table {}", args.table.display()));
    output::print_kv("States", &output::format_number(table.len()));

    if table.is_empty() {
        println!("  (empty table)");
        return Ok(());
    }

    let mut min_q = f64::INFINITY;
    let mut max_q = f64::NEG_INFINITY;
    let mut greedy_counts: HashMap<Action, usize> = HashMap::new();
    for (_, values) in table.iter() {
        for (_, q) in values.iter() {
            min_q = min_q.min(q);
            max_q = max_q.max(q);
        }
        *greedy_counts.entry(values.best()).or_insert(0) += 1;
    }

    output::print_kv("Min Q", &format!("{min_q:.4}"));
    output::print_kv("Max Q", &format!("{max_q:.4}"));

    output::print_subsection("Greedy actions");
    for action in Action::ALL {
        let count = greedy_counts.get(&action).copied().unwrap_or(0);
        output::print_kv(&action.to_string(), &output::format_number(count));
    }

    Ok(())
}
