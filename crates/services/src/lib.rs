#![forbid(unsafe_code)]

pub mod app_services;
pub mod audio;
pub mod error;
pub mod progress;
pub mod reveal;
pub mod settings;

pub use folio_core::Clock;

pub use app_services::AppServices;
pub use audio::{AudioOutput, AudioState, KeySounds, ToneSpec};
pub use error::{AppServicesError, AudioError};
pub use progress::{ProgressService, RestoreOutcome};
pub use reveal::{RevealEnd, run_reveal};
pub use settings::{RevealSettings, WidgetSettings};
