use folio_core::model::{FlowPhase, PromptFlow};

/// User intents raised by the prompt widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetIntent {
    /// First pointer or key press; unlocks key sounds.
    Interact,
    Input(String),
    Submit,
    Skip,
    Restart,
    ToggleSound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptItemVm {
    pub prompt: String,
    pub answer: String,
}

/// The prompt being typed or answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePromptVm {
    pub text: String,
    pub typing: bool,
    pub input: String,
}

impl ActivePromptVm {
    #[must_use]
    pub fn show_cursor(&self) -> bool {
        self.typing
    }

    #[must_use]
    pub fn show_skip(&self) -> bool {
        self.typing
    }

    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.typing
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptWidgetVm {
    pub transcript: Vec<TranscriptItemVm>,
    /// `None` while restoring and once every prompt is answered.
    pub active: Option<ActivePromptVm>,
    pub done: bool,
}

#[must_use]
pub fn map_prompt_widget(flow: &PromptFlow) -> PromptWidgetVm {
    let transcript = flow
        .transcript()
        .map(|entry| TranscriptItemVm {
            prompt: entry.prompt.to_string(),
            answer: entry.answer.to_string(),
        })
        .collect();

    let active = match flow.phase() {
        FlowPhase::Typing(_) | FlowPhase::AwaitingInput(_) => Some(ActivePromptVm {
            text: flow.displayed().to_string(),
            typing: flow.is_typing(),
            input: flow.input().to_string(),
        }),
        FlowPhase::Restoring | FlowPhase::Done => None,
    };

    PromptWidgetVm {
        transcript,
        active,
        done: flow.is_done(),
    }
}

/// Where the completion screen can send the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionLink {
    Projects,
    About,
    Resume,
}

impl CompletionLink {
    pub const ALL: [Self; 3] = [Self::Projects, Self::About, Self::Resume];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "See What I Build",
            Self::About => "Who I Am",
            Self::Resume => "Professional Stuff",
        }
    }
}
