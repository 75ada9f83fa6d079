use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use folio_core::model::PromptSequence;
use services::{AppServices, AppServicesError, AudioOutput, Clock, ProgressService, WidgetSettings};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::platform::{DesktopLinkOpener, LinkOpenerRef, WebAudioOutput};
use ui::{App, UiApp, build_app_context};

const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("failed to prepare database file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Services(#[from] AppServicesError),
}

/// Personal portfolio with an interactive prompt widget.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Args {
    /// `SQLite` database holding widget progress.
    #[arg(long = "db", env = "FOLIO_DB_URL", default_value = "sqlite://folio.sqlite3")]
    db_url: String,

    /// Start with key sounds switched off.
    #[arg(long, env = "FOLIO_MUTE")]
    mute: bool,
}

struct DesktopApp {
    services: AppServices,
    audio: Arc<WebAudioOutput>,
    opener: Arc<DesktopLinkOpener>,
}

impl UiApp for DesktopApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn prompts(&self) -> PromptSequence {
        self.services.prompts()
    }

    fn widget_settings(&self) -> WidgetSettings {
        self.services.settings()
    }

    fn audio_output(&self) -> Option<Arc<dyn AudioOutput>> {
        let audio: Arc<dyn AudioOutput> = self.audio.clone();
        Some(audio)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.opener.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn normalize_sqlite_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed == MEMORY_URL || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_string());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    if path_str.is_empty() {
        return Err(AppError::InvalidDbUrl {
            raw: raw.to_string(),
        });
    }

    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), AppError> {
    if db_url == MEMORY_URL {
        return Ok(());
    }

    let invalid = || AppError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run(args: Args) -> Result<(), AppError> {
    let db_url = normalize_sqlite_url(&args.db_url)?;
    prepare_sqlite_file(&db_url)?;

    let settings = WidgetSettings::default().with_key_sound(!args.mute);
    let services = AppServices::new_sqlite(&db_url, Clock::system(), settings).await?;
    tracing::info!(db = %db_url, key_sound = settings.key_sound, "starting folio");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        audio: Arc::new(WebAudioOutput),
        opener: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    // tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_and_full_urls_pass_through() {
        assert_eq!(normalize_sqlite_url(MEMORY_URL).unwrap(), MEMORY_URL);
        assert_eq!(
            normalize_sqlite_url(" sqlite:///tmp/folio.db ").unwrap(),
            "sqlite:///tmp/folio.db"
        );
    }

    #[test]
    fn bare_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:/var/lib/folio.db").unwrap();
        assert_eq!(url, "sqlite:///var/lib/folio.db");

        let relative = normalize_sqlite_url("data/folio.db").unwrap();
        assert!(relative.starts_with("sqlite:///"), "{relative}");
        assert!(relative.ends_with("data/folio.db"), "{relative}");
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            normalize_sqlite_url("sqlite:"),
            Err(AppError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            prepare_sqlite_file("sqlite://"),
            Err(AppError::InvalidDbUrl { .. })
        ));
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("folio-app-{}", std::process::id()));
        let file = dir.join("nested").join("folio.sqlite3");
        let url = format!("sqlite://{}?mode=rwc", file.display());

        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn args_default_to_local_database() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.db_url.starts_with("sqlite://"));
        let args = Args::try_parse_from(["folio", "--db", "x.db", "--mute"]).unwrap();
        assert_eq!(args.db_url, "x.db");
        assert!(args.mute);
    }
}
