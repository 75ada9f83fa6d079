use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Snapshot, SnapshotError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,

    #[error("all prompts are already answered")]
    Completed,
}

/// Result of recording one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The next prompt to ask.
    Next(usize),
    Completed,
}

/// Answers collected so far, index-aligned to the prompt sequence.
///
/// The current prompt index is always `answers.len()`, and the session is
/// complete exactly when every prompt has an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSession {
    prompt_count: usize,
    answers: Vec<String>,
}

impl PromptSession {
    #[must_use]
    pub fn new(prompt_count: usize) -> Self {
        Self {
            prompt_count,
            answers: Vec::with_capacity(prompt_count),
        }
    }

    /// Rehydrate a session from a persisted snapshot.
    ///
    /// Completed snapshots keep the first `prompt_count` answers. Incomplete
    /// snapshots keep the first `q_index` answers; extra trailing answers are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::IndexOutOfRange` if an incomplete snapshot
    /// points past the last prompt, and `SnapshotError::MissingAnswers` if it
    /// holds fewer answers than its index claims.
    pub fn from_snapshot(snapshot: &Snapshot, prompt_count: usize) -> Result<Self, SnapshotError> {
        let expected = if snapshot.done {
            prompt_count
        } else {
            if snapshot.q_index >= prompt_count {
                return Err(SnapshotError::IndexOutOfRange {
                    q_index: snapshot.q_index,
                    prompt_count,
                });
            }
            snapshot.q_index
        };

        if snapshot.answers.len() < expected {
            return Err(SnapshotError::MissingAnswers {
                expected,
                found: snapshot.answers.len(),
            });
        }

        Ok(Self {
            prompt_count,
            answers: snapshot.answers[..expected].to_vec(),
        })
    }

    /// Trim and record an answer for the current prompt.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Empty` for whitespace-only input and
    /// `AnswerError::Completed` once every prompt is answered. Neither changes
    /// the session.
    pub fn record_answer(&mut self, raw: &str) -> Result<AnswerOutcome, AnswerError> {
        if self.is_complete() {
            return Err(AnswerError::Completed);
        }
        let answer = raw.trim();
        if answer.is_empty() {
            return Err(AnswerError::Empty);
        }

        self.answers.push(answer.to_string());
        if self.is_complete() {
            Ok(AnswerOutcome::Completed)
        } else {
            Ok(AnswerOutcome::Next(self.answers.len()))
        }
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompt_count
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.prompt_count
    }

    #[must_use]
    pub fn to_snapshot(&self, saved_at: DateTime<Utc>) -> Snapshot {
        Snapshot::new(
            self.answers.clone(),
            self.current_index(),
            self.is_complete(),
            saved_at,
        )
    }
}
