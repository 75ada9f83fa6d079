use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days a saved snapshot stays valid.
pub const SNAPSHOT_TTL_DAYS: i64 = 14;

/// Expiry window applied to persisted snapshots.
#[must_use]
pub fn snapshot_ttl() -> Duration {
    Duration::days(SNAPSHOT_TTL_DAYS)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("prompt index {q_index} is out of range for {prompt_count} prompts")]
    IndexOutOfRange { q_index: usize, prompt_count: usize },

    #[error("expected at least {expected} answers, found {found}")]
    MissingAnswers { expected: usize, found: usize },
}

/// Persisted form of a prompt session.
///
/// Field names follow the stored JSON (`answers`, `qIndex`, `done`, `savedAt`).
/// `savedAt` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub q_index: usize,
    #[serde(default)]
    pub done: bool,
    pub saved_at: i64,
}

impl Snapshot {
    #[must_use]
    pub fn new(answers: Vec<String>, q_index: usize, done: bool, saved_at: DateTime<Utc>) -> Self {
        Self {
            answers,
            q_index,
            done,
            saved_at: saved_at.timestamp_millis(),
        }
    }

    /// The save time, if `savedAt` is representable.
    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.saved_at)
    }

    /// Age of the snapshot relative to `now`. Negative for future timestamps.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        Duration::milliseconds(now.timestamp_millis().saturating_sub(self.saved_at))
    }

    /// True while `now - savedAt` is strictly below `ttl`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}
