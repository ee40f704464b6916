//! Key-value stores backing session-scoped state.
//!
//! Callers receive a store explicitly instead of probing the environment:
//! [`MemoryStore`] lives as long as the process, [`SqliteStore`] survives
//! restarts within one session namespace, and [`NullStore`] stands in when no
//! storage exists at all.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::types::errors::StorageError;

/// A string key-value store with session lifetime.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Whether writes actually go anywhere.
    fn is_available(&self) -> bool {
        true
    }
}

/// Store used when no storage is available. Reads find nothing, writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl SessionStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
