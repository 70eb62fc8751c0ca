//! CSV export for Q-tables
//!
//! Dumps a learned table to CSV for analysis in external tooling: one row
//! per state key with the five per-action estimates and the greedy action.

use std::path::Path;

use crate::{
    Result,
    action::Action,
    error::Error,
    q_learning::{ActionValues, QTable, StateKey},
};

/// Write `table` to `path` as CSV.
///
/// Rows are sorted by state key so repeated exports of the same table are
/// byte-identical.
pub fn write_table_csv(table: &QTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["state_key", "up", "down", "left", "right", "stay", "greedy"])?;

    let mut entries: Vec<(&StateKey, &ActionValues)> = table.iter().collect();
    entries.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));

    for (key, values) in entries {
        let mut record = vec![key.as_str().to_string()];
        record.extend(Action::ALL.iter().map(|&a| values.value(a).to_string()));
        record.push(values.best().to_string());
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush CSV export {path:?}"),
        source,
    })?;
    Ok(())
}
