//! JSON encoding of persisted snapshots.

use folio_core::model::Snapshot;

use crate::repository::StorageError;

/// Serialize a snapshot to its stored JSON form.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, StorageError> {
    serde_json::to_string(snapshot).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse a stored payload back into a snapshot.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed or incomplete payloads.
pub fn decode_snapshot(raw: &str) -> Result<Snapshot, StorageError> {
    serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
}
