//! Repository port for Q-table persistence.
//!
//! This module defines the trait boundary between the learning core and the
//! storage layer.

use std::path::Path;

use crate::{Result, q_learning::QTable};

/// Port for persisting and loading Q-tables.
///
/// The agent saves through this trait after every update (write-through) and
/// loads through it once at construction. Implementations decide the storage
/// mechanism; the agent only cares that a saved table loads back with
/// identical key/action/value contents.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use hopper::{QTable, ports::TableRepository};
///
/// fn snapshot<R: TableRepository>(repo: &R, table: &QTable) -> hopper::Result<()> {
///     repo.save(table, Path::new("train/q.json"))
/// }
/// ```
pub trait TableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    /// No retries are attempted.
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or does
    /// not deserialize. The caller decides whether that is fatal: training
    /// agents tolerate it and start empty, inference agents do not.
    fn load(&self, path: &Path) -> Result<QTable>;
}
