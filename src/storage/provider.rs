//! Key-value storage providers
//!
//! Saved plans only need "get a string by key" and "put a string by key".
//! Hiding that behind [`StorageProvider`] keeps the repository and its tests
//! independent of where the bytes end up.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;

use super::file_io::{read_text, write_text_atomic};

/// A minimal string key-value store
pub trait StorageProvider {
    /// Value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`: characters outside `[A-Za-z0-9_-]` become `_`
    pub fn key_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl StorageProvider for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        read_text(self.key_path(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        write_text_atomic(self.key_path(key), value)
    }
}

/// In-process store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: StorageProvider + ?Sized> StorageProvider for &S {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        (**self).set(key, value)
    }
}
