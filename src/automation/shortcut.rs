use anyhow::Result;
use std::thread;
use std::time::Duration;
use url::Url;

use crate::automation::{Clipboard, Launcher};

/// A Shortcuts-app automation that reports back through the clipboard.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutRequest {
    pub name: &'static str,
    /// Text (case-insensitive) that marks the clipboard as holding the result.
    pub marker: &'static str,
    pub interval: Duration,
    pub max_attempts: u32,
}

/// AI parse of the job posting open in the browser (~15s budget).
pub const PARSE_JOB: ShortcutRequest = ShortcutRequest {
    name: "Parse Job",
    marker: "Role:",
    interval: Duration::from_millis(100),
    max_attempts: 150,
};

/// AI classification of recent recruiting emails (~30s budget).
pub const CHECK_JOB_EMAILS: ShortcutRequest = ShortcutRequest {
    name: "Check Job Emails",
    marker: "company",
    interval: Duration::from_millis(500),
    max_attempts: 60,
};

pub fn shortcut_url(name: &str) -> Result<String> {
    let mut url = Url::parse("shortcuts://run-shortcut")?;
    url.set_query(Some(&format!("name={name}")));
    Ok(url.to_string())
}

pub struct ShortcutRunner<'a> {
    clipboard: &'a dyn Clipboard,
    launcher: &'a dyn Launcher,
    sleep: fn(Duration),
}

impl<'a> ShortcutRunner<'a> {
    pub fn new(clipboard: &'a dyn Clipboard, launcher: &'a dyn Launcher) -> Self {
        Self {
            clipboard,
            launcher,
            sleep: thread::sleep,
        }
    }

    #[cfg(test)]
    pub(crate) fn without_delay(clipboard: &'a dyn Clipboard, launcher: &'a dyn Launcher) -> Self {
        Self {
            clipboard,
            launcher,
            sleep: |_| {},
        }
    }

    /// Run the shortcut and wait for its result.
    ///
    /// The clipboard is cleared, the shortcut launched, then the clipboard is
    /// polled every `interval` until it holds non-empty text containing the
    /// marker. After `max_attempts` polls whatever the clipboard holds is
    /// returned, which may be empty or unrelated.
    pub fn run(&self, req: &ShortcutRequest) -> Result<String> {
        self.clipboard.write("")?;
        self.trigger(req)?;

        let marker = req.marker.to_lowercase();
        for attempt in 1..=req.max_attempts {
            (self.sleep)(req.interval);
            let content = self.clipboard.read()?;
            if !content.is_empty() && content.to_lowercase().contains(&marker) {
                log::debug!("{} answered after {attempt} polls", req.name);
                return Ok(content);
            }
        }

        log::warn!(
            "{} gave no recognisable result after {} polls",
            req.name,
            req.max_attempts
        );
        self.clipboard.read()
    }

    /// Launch the shortcut without waiting for a result.
    pub fn trigger(&self, req: &ShortcutRequest) -> Result<()> {
        let url = shortcut_url(req.name)?;
        log::info!("launching shortcut {:?}", req.name);
        self.launcher.open_url(&url)
    }
}
