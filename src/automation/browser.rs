use anyhow::{Result, anyhow};

use crate::automation::BrowserProbe;
use crate::automation::system::run_capture;

/// Asks a Chromium-family browser for its active tab through `osascript`.
pub struct AppleScriptBrowser {
    app: String,
}

impl AppleScriptBrowser {
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into() }
    }

    fn script(&self) -> String {
        format!(
            "tell application \"{}\" to return URL of active tab of front window",
            self.app.replace('"', "")
        )
    }
}

impl BrowserProbe for AppleScriptBrowser {
    fn active_tab_url(&self) -> Result<String> {
        let unavailable = || {
            anyhow!(
                "Could not get browser URL. Make sure {} is open with a tab.",
                self.app
            )
        };

        match run_capture("osascript", &["-e", &self.script()]) {
            Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
            Ok(_) => Err(unavailable()),
            Err(e) => {
                log::debug!("osascript failed: {e:#}");
                Err(unavailable())
            }
        }
    }
}
