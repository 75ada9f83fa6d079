use std::sync::Arc;

mod desktop;
mod web_audio;

pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;
pub use web_audio::WebAudioOutput;
