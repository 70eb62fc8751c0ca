//! In-memory table repository for testing.
//!
//! This adapter provides a pure in-memory implementation of TableRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, error::Error, ports::TableRepository, q_learning::QTable};

/// In-memory repository for testing.
///
/// Stores serialized tables in a shared map keyed by path. Clones share the
/// same underlying storage, so a test can hand one clone to an agent and
/// inspect writes through another.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use hopper::{QTable, adapters::InMemoryRepository, ports::TableRepository};
///
/// let repo = InMemoryRepository::new();
/// repo.save(&QTable::new(), Path::new("q"))?;
/// let loaded = repo.load(Path::new("q"))?;
/// assert!(loaded.is_empty());
/// # Ok::<(), hopper::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables currently stored.
    ///
    /// Useful for verifying that save operations occurred.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Remove all stored tables.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Check whether a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl TableRepository for InMemoryRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        let bytes = serde_json::to_vec(table)?;
        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let table = serde_json::from_slice(bytes)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, StateKey};

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut table = QTable::new();
        table.initialize_with(StateKey::from("________"), Action::Up, || 0.5);

        let path = Path::new("test_table");
        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&table, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded = repo.load(path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&QTable::new(), Path::new("shared")).unwrap();
        assert!(repo2.contains(Path::new("shared")));
        assert_eq!(repo2.count(), 1);

        repo2.clear();
        assert_eq!(repo1.count(), 0);
    }
}
