use std::sync::Arc;

use folio_core::model::PromptSequence;
use services::{AudioOutput, ProgressService, WidgetSettings};

use crate::platform::LinkOpenerRef;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn prompts(&self) -> PromptSequence;
    fn widget_settings(&self) -> WidgetSettings;

    /// `None` runs the widget without key sounds.
    fn audio_output(&self) -> Option<Arc<dyn AudioOutput>>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    prompts: PromptSequence,
    widget_settings: WidgetSettings,
    audio_output: Option<Arc<dyn AudioOutput>>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            prompts: app.prompts(),
            widget_settings: app.widget_settings(),
            audio_output: app.audio_output(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn prompts(&self) -> PromptSequence {
        self.prompts.clone()
    }

    #[must_use]
    pub fn widget_settings(&self) -> WidgetSettings {
        self.widget_settings
    }

    #[must_use]
    pub fn audio_output(&self) -> Option<Arc<dyn AudioOutput>> {
        self.audio_output.clone()
    }

    pub fn open_url(&self, url: &str) {
        self.link_opener.open_url(url);
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
