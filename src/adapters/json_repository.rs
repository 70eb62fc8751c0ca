//! JSON implementation of the table repository.
//!
//! This adapter implements the TableRepository port using serde_json. JSON is
//! the table's interchange format: a single object keyed by state key, each
//! value a record of the five action characters to floating-point estimates.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{Result, error::Error, ports::TableRepository, q_learning::QTable};

/// JSON-file-backed table repository.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use hopper::{QTable, adapters::JsonRepository, ports::TableRepository};
///
/// let repo = JsonRepository::new();
/// let table = QTable::new();
///
/// repo.save(&table, Path::new("train/q.json"))?;
/// let loaded = repo.load(Path::new("train/q.json"))?;
/// # Ok::<(), hopper::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for JsonRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create table directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create table file {path:?}"),
            source,
        })?;

        serde_json::to_writer(BufWriter::new(file), table)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open table file {path:?}"),
            source,
        })?;

        let table = serde_json::from_reader(BufReader::new(file))?;
        Ok(table)
    }
}
