use async_trait::async_trait;
use chrono::Utc;
use folio_core::model::Snapshot;
use sqlx::Row;

use crate::codec::{decode_snapshot, encode_snapshot};
use crate::repository::{SNAPSHOT_KEY, SnapshotStore, StorageError};

use super::SqliteRepository;

impl SqliteRepository {
    /// Raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` on query failures.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))
        })
        .transpose()
    }

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` on query failures.
    pub async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` on query failures.
    pub async fn delete_value(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for SqliteRepository {
    async fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        self.get_value(SNAPSHOT_KEY)
            .await?
            .as_deref()
            .map(decode_snapshot)
            .transpose()
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let raw = encode_snapshot(snapshot)?;
        self.put_value(SNAPSHOT_KEY, &raw).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.delete_value(SNAPSHOT_KEY).await
    }
}
