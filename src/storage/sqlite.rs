//! SQLite-backed key-value store, namespaced per session.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use super::SessionStore;
use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// Persists values in the `kv_store` table under a fixed namespace.
///
/// A host process that restarts with the same namespace sees the values its
/// previous run left behind, which is how the RPC server keeps one session's
/// state across restarts.
pub struct SqliteStore {
    db: Arc<Database>,
    namespace: String,
}

impl SqliteStore {
    pub fn new(db: Arc<Database>, namespace: &str) -> Self {
        Self {
            db,
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Removes every key in this namespace.
    pub fn clear_namespace(&self) -> Result<usize, StorageError> {
        self.db
            .connection()
            .execute(
                "DELETE FROM kv_store WHERE namespace = ?1",
                params![self.namespace],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))
    }
}

impl SessionStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let result = self.db.connection().query_row(
            "SELECT value FROM kv_store WHERE namespace = ?1 AND key = ?2",
            params![self.namespace, key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::DatabaseError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;

        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO kv_store (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)",
                params![self.namespace, key, value, now],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute(
                "DELETE FROM kv_store WHERE namespace = ?1 AND key = ?2",
                params![self.namespace, key],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
