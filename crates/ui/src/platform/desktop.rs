use std::process::Command;

use super::UiLinkOpener;

/// Hands external links (mail, social, project sites) to the OS opener.
pub struct DesktopLinkOpener;

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        let Some(mut command) = opener_command(url) else {
            tracing::debug!(url, "no link opener for this platform");
            return;
        };
        if let Err(err) = command.spawn() {
            tracing::warn!(url, error = %err, "failed to open link");
        }
    }
}

fn opener_command(url: &str) -> Option<Command> {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        Some(command)
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        Some(command)
    } else if cfg!(target_os = "linux") {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        Some(command)
    } else {
        None
    }
}
