//! OS-level collaborators: the browser, the clipboard and the Shortcuts app.
//! Each sits behind a trait so the flows can be exercised without a Mac.

pub mod browser;
pub mod shortcut;
pub mod system;

use anyhow::Result;

pub trait Clipboard {
    fn read(&self) -> Result<String>;
    fn write(&self, text: &str) -> Result<()>;
}

/// Opens URLs (including `shortcuts://` ones) without stealing focus.
pub trait Launcher {
    fn open_url(&self, url: &str) -> Result<()>;
}

pub trait BrowserProbe {
    /// URL of the active tab in the front window.
    fn active_tab_url(&self) -> Result<String>;
}

pub use browser::AppleScriptBrowser;
pub use shortcut::{CHECK_JOB_EMAILS, PARSE_JOB, ShortcutRequest, ShortcutRunner};
pub use system::{SystemClipboard, SystemLauncher};
