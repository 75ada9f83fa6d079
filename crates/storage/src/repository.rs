use async_trait::async_trait;
use folio_core::model::Snapshot;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::codec::{decode_snapshot, encode_snapshot};

/// Key under which the prompt widget's snapshot is stored.
pub const SNAPSHOT_KEY: &str = "qa_state_v1";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable home of the prompt widget's single snapshot.
///
/// Writes replace the whole snapshot; there are no partial updates.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for an unreadable payload, or
    /// `StorageError::Connection` if the backend is unavailable.
    async fn load(&self) -> Result<Option<Snapshot>, StorageError>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be encoded or written.
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;

    /// Remove the stored snapshot. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend is unavailable.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store for tests and ephemeral runs.
///
/// Keeps the encoded payload so decoding behaves exactly like the durable
/// store, including for corrupt data seeded with [`InMemoryRepository::with_raw`].
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    payload: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with an arbitrary raw payload.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw payload currently stored.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SnapshotStore for InMemoryRepository {
    async fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.as_deref().map(decode_snapshot).transpose()
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let raw = encode_snapshot(snapshot)?;
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub snapshots: Arc<dyn SnapshotStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let snapshots: Arc<dyn SnapshotStore> = Arc::new(InMemoryRepository::new());
        Self { snapshots }
    }
}
