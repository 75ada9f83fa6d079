//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors raised by an audio output while acquiring its device.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
