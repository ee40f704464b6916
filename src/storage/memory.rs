//! In-process key-value store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::SessionStore;
use crate::types::errors::StorageError;

/// `HashMap`-backed store. Clones share the same underlying map, so a test or
/// host can keep a handle while a manager owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        map.remove(key);
        Ok(())
    }
}
