use std::sync::Arc;

use folio_core::model::PromptSequence;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress::ProgressService;
use crate::settings::WidgetSettings;

/// Assembles the services the UI needs.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    prompts: PromptSequence,
    settings: WidgetSettings,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        settings: WidgetSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, settings))
    }

    /// Services over a throwaway in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock, settings: WidgetSettings) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, settings)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, settings: WidgetSettings) -> Self {
        let progress = ProgressService::new(clock, Arc::clone(&storage.snapshots))
            .with_ttl(settings.snapshot_ttl);
        Self {
            progress: Arc::new(progress),
            prompts: PromptSequence::landing(),
            settings,
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
    pub fn settings(&self) -> WidgetSettings {
        self.settings
    }
}
