//! Storage layer for budget-split
//!
//! Plans are kept in a small key-value store (see [`StorageProvider`]); on
//! disk each key is a JSON file written atomically.

pub mod file_io;
pub mod plans;
pub mod provider;

pub use file_io::{read_plan_file, write_json_atomic, write_plan_file, PlanFileFormat};
pub use plans::{PlanRepository, PLANS_STORAGE_KEY};
pub use provider::{FileStorage, MemoryStorage, StorageProvider};

use crate::config::paths::BudgetSplitPaths;
use crate::error::BudgetError;

/// Main storage coordinator backed by the data directory
pub struct Storage {
    paths: BudgetSplitPaths,
    pub plans: PlanRepository<FileStorage>,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BudgetSplitPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            plans: PlanRepository::new(FileStorage::new(paths.data_dir())),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetSplitPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.plans.list().is_empty());
    }
}
