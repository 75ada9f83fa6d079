mod flow;
mod prompt;
mod session;
mod snapshot;

pub use flow::{
    FlowError, FlowPhase, PromptFlow, RevealStep, RevealTicket, SubmitOutcome, TranscriptEntry,
};
pub use prompt::{DEFAULT_PROMPTS, PromptError, PromptSequence};
pub use session::{AnswerError, AnswerOutcome, PromptSession};
pub use snapshot::{SNAPSHOT_TTL_DAYS, Snapshot, SnapshotError, snapshot_ttl};
