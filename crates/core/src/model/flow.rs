//! State machine behind the landing-page question widget.
//!
//! `Restoring -> Typing(i) -> AwaitingInput(i) -> Typing(i + 1) -> ... -> Done`
//!
//! The flow never sleeps. Timed reveals are driven from outside by repeatedly
//! calling [`PromptFlow::reveal_next`] with the [`RevealTicket`] handed out when
//! typing began. Any transition that supersedes a reveal bumps the flow's epoch,
//! after which the old ticket only ever yields [`RevealStep::Stale`].

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerError, AnswerOutcome, PromptSequence, PromptSession, Snapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    Restoring,
    Typing(usize),
    AwaitingInput(usize),
    Done,
}

/// Identifies one reveal run of one prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    epoch: u64,
    index: usize,
}

impl RevealTicket {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// One more unit is now displayed.
    Unit(char),
    /// The whole prompt is displayed and input is awaited.
    Finished,
    /// The ticket was superseded; the caller must stop.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Advanced(RevealTicket),
    Completed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("answer is empty")]
    EmptyAnswer,

    #[error("no prompt is awaiting input")]
    NotAwaitingInput,
}

/// One answered prompt, for transcript rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptEntry<'a> {
    pub index: usize,
    pub prompt: &'a str,
    pub answer: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptFlow {
    prompts: PromptSequence,
    session: PromptSession,
    phase: FlowPhase,
    displayed: String,
    input: String,
    epoch: u64,
}

impl PromptFlow {
    #[must_use]
    pub fn new(prompts: PromptSequence) -> Self {
        let session = PromptSession::new(prompts.len());
        Self {
            prompts,
            session,
            phase: FlowPhase::Restoring,
            displayed: String::new(),
            input: String::new(),
            epoch: 0,
        }
    }

    /// Leave `Restoring`, either resuming `session` without animation or
    /// starting a fresh reveal of the first prompt.
    ///
    /// Returns the ticket for the reveal to drive, if any. Ignored (returns
    /// `None`) outside `Restoring`, and a session built for a different prompt
    /// count is treated as absent.
    pub fn restore(&mut self, session: Option<PromptSession>) -> Option<RevealTicket> {
        if self.phase != FlowPhase::Restoring {
            return None;
        }

        match session.filter(|s| s.prompt_count() == self.prompts.len()) {
            Some(session) if session.is_complete() => {
                self.session = session;
                self.displayed.clear();
                self.phase = FlowPhase::Done;
                None
            }
            Some(session) => {
                let index = session.current_index();
                self.session = session;
                self.displayed = self.prompts.get(index).unwrap_or_default().to_string();
                self.phase = FlowPhase::AwaitingInput(index);
                None
            }
            None => Some(self.begin_typing(0)),
        }
    }

    /// Reveal the next unit of the prompt being typed.
    pub fn reveal_next(&mut self, ticket: RevealTicket) -> RevealStep {
        if ticket.epoch != self.epoch || self.phase != FlowPhase::Typing(ticket.index) {
            return RevealStep::Stale;
        }
        let Some(text) = self.prompts.get(ticket.index) else {
            return RevealStep::Stale;
        };

        // `displayed` is always a prefix of `text` while typing.
        match text[self.displayed.len()..].chars().next() {
            Some(unit) => {
                self.displayed.push(unit);
                RevealStep::Unit(unit)
            }
            None => {
                self.phase = FlowPhase::AwaitingInput(ticket.index);
                RevealStep::Finished
            }
        }
    }

    /// Show the whole prompt at once. Returns false when nothing was typing.
    pub fn skip(&mut self) -> bool {
        let FlowPhase::Typing(index) = self.phase else {
            return false;
        };
        self.invalidate_reveal();
        self.displayed = self.prompts.get(index).unwrap_or_default().to_string();
        self.phase = FlowPhase::AwaitingInput(index);
        true
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Record the trimmed input as the answer to the awaiting prompt.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAwaitingInput` outside `AwaitingInput` and
    /// `FlowError::EmptyAnswer` for whitespace-only input. Both leave the flow
    /// untouched, including the input buffer.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FlowError> {
        let FlowPhase::AwaitingInput(index) = self.phase else {
            return Err(FlowError::NotAwaitingInput);
        };
        debug_assert_eq!(index, self.session.current_index());

        let outcome = self.session.record_answer(&self.input).map_err(|err| match err {
            AnswerError::Empty => FlowError::EmptyAnswer,
            _ => FlowError::NotAwaitingInput,
        })?;
        self.input.clear();

        match outcome {
            AnswerOutcome::Next(next) => Ok(SubmitOutcome::Advanced(self.begin_typing(next))),
            AnswerOutcome::Completed => {
                self.invalidate_reveal();
                self.displayed.clear();
                self.phase = FlowPhase::Done;
                Ok(SubmitOutcome::Completed)
            }
        }
    }

    /// Drop every answer and start over from the first prompt.
    pub fn restart(&mut self) -> RevealTicket {
        self.session.reset();
        self.input.clear();
        self.begin_typing(0)
    }

    /// Invalidate any outstanding reveal, e.g. when the widget goes away.
    pub fn cancel_reveal(&mut self) {
        self.invalidate_reveal();
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, FlowPhase::Typing(_))
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == FlowPhase::Done
    }

    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn prompts(&self) -> &PromptSequence {
        &self.prompts
    }

    #[must_use]
    pub fn session(&self) -> &PromptSession {
        &self.session
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    /// Answered prompts in order, oldest first.
    pub fn transcript(&self) -> impl Iterator<Item = TranscriptEntry<'_>> {
        self.prompts
            .iter()
            .zip(self.session.answers())
            .enumerate()
            .map(|(index, (prompt, answer))| TranscriptEntry {
                index,
                prompt,
                answer: answer.as_str(),
            })
    }

    #[must_use]
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> Snapshot {
        self.session.to_snapshot(saved_at)
    }

    fn begin_typing(&mut self, index: usize) -> RevealTicket {
        self.invalidate_reveal();
        self.displayed.clear();
        self.phase = FlowPhase::Typing(index);
        RevealTicket {
            epoch: self.epoch,
            index,
        }
    }

    fn invalidate_reveal(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}
