use std::sync::Arc;

use folio_core::model::{PromptSequence, PromptSession, snapshot_ttl};
use storage::repository::{SnapshotStore, StorageError};
use tokio::sync::Mutex;

use crate::Clock;

/// What the widget found when it looked for saved progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No snapshot was stored.
    Empty,
    /// A snapshot existed but was older than the expiry window; it was deleted.
    Expired,
    /// The store failed or held a payload that could not be applied.
    Unreadable,
    Resumed(PromptSession),
}

impl RestoreOutcome {
    #[must_use]
    pub fn into_session(self) -> Option<PromptSession> {
        match self {
            Self::Resumed(session) => Some(session),
            Self::Empty | Self::Expired | Self::Unreadable => None,
        }
    }
}

/// Persists and restores the prompt widget's progress.
///
/// Storage failures never reach the caller: they are logged and the widget
/// carries on as if nothing had been saved. Writes and deletes are applied in
/// the order they were issued.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn SnapshotStore>,
    ttl: chrono::Duration,
    writes: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            clock,
            store,
            ttl: snapshot_ttl(),
            writes: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Load saved progress for `prompts`, deleting anything expired or
    /// inconsistent.
    pub async fn restore(&self, prompts: &PromptSequence) -> RestoreOutcome {
        let snapshot = match self.store.load().await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return RestoreOutcome::Empty,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load saved progress");
                if matches!(err, StorageError::Serialization(_)) {
                    self.clear().await;
                }
                return RestoreOutcome::Unreadable;
            }
        };

        let now = self.clock.now();
        if !snapshot.is_fresh(now, self.ttl) {
            tracing::debug!(saved_at = snapshot.saved_at, "saved progress expired");
            self.clear().await;
            return RestoreOutcome::Expired;
        }

        match PromptSession::from_snapshot(&snapshot, prompts.len()) {
            Ok(session) => {
                tracing::debug!(
                    index = session.current_index(),
                    done = session.is_complete(),
                    "resuming saved progress"
                );
                RestoreOutcome::Resumed(session)
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding inconsistent saved progress");
                self.clear().await;
                RestoreOutcome::Unreadable
            }
        }
    }

    /// Write `session` stamped with the current time. Returns whether the write
    /// succeeded.
    pub async fn persist(&self, session: &PromptSession) -> bool {
        let snapshot = session.to_snapshot(self.clock.now());
        let _guard = self.writes.lock().await;
        match self.store.save(&snapshot).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "failed to save progress");
                false
            }
        }
    }

    /// Delete saved progress. Returns whether the delete succeeded.
    pub async fn clear(&self) -> bool {
        let _guard = self.writes.lock().await;
        match self.store.clear().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "failed to clear saved progress");
                false
            }
        }
    }
}
