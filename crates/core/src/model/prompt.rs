use std::sync::Arc;

use thiserror::Error;

/// The questions asked on the landing page, in order.
pub const DEFAULT_PROMPTS: [&str; 4] = [
    "What’s your name?",
    "What’s one thing you’re proud of this week?",
    "What’s something you want to explore this month?",
    "If you could message future-you, what would you say?",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PromptError {
    #[error("prompt sequence is empty")]
    Empty,

    #[error("prompt {index} is blank")]
    Blank { index: usize },
}

/// Ordered, immutable list of prompts indexed `0..len()`.
///
/// Cloning is cheap; the texts are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSequence {
    prompts: Arc<[String]>,
}

impl PromptSequence {
    /// Build a sequence from the given texts.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Empty` for an empty list and `PromptError::Blank`
    /// if any prompt is empty after trimming.
    pub fn new<I, S>(prompts: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompts: Vec<String> = prompts.into_iter().map(Into::into).collect();
        if prompts.is_empty() {
            return Err(PromptError::Empty);
        }
        if let Some(index) = prompts.iter().position(|p| p.trim().is_empty()) {
            return Err(PromptError::Blank { index });
        }
        Ok(Self {
            prompts: prompts.into(),
        })
    }

    /// The fixed landing-page questions.
    #[must_use]
    pub fn landing() -> Self {
        Self {
            prompts: DEFAULT_PROMPTS.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(String::as_str)
    }
}

impl Default for PromptSequence {
    fn default() -> Self {
        Self::landing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_has_four_prompts() {
        let prompts = PromptSequence::landing();
        assert_eq!(prompts.len(), 4);
        assert_eq!(prompts.get(0), Some("What’s your name?"));
        assert_eq!(prompts.get(4), None);
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(
            PromptSequence::new(Vec::<String>::new()).unwrap_err(),
            PromptError::Empty
        );
        assert_eq!(
            PromptSequence::new(["ok", "  "]).unwrap_err(),
            PromptError::Blank { index: 1 }
        );
    }
}
