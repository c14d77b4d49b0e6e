use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::config_dir;

/// Small key-value preferences kept in ~/.config/job_tracker/prefs.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Parse the posting as soon as the form opens, and close the form when
    /// the browser moves to another page.
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

fn default_auto_refresh() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_refresh: default_auto_refresh(),
        }
    }
}

pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn open_default() -> Result<Self> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)?;
        Ok(Self::at(dir.join("prefs.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing or unreadable file yields the defaults.
    pub fn load(&self) -> Preferences {
        let Ok(s) = fs::read_to_string(&self.path) else {
            return Preferences::default();
        };
        serde_json::from_str(&s).unwrap_or_else(|e| {
            log::warn!("ignoring malformed {}: {e}", self.path.display());
            Preferences::default()
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let s = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, s)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_auto_refresh_on() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.json"));
        assert!(store.load().auto_refresh);
    }

    #[test]
    fn toggle_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.json"));

        store.save(&Preferences { auto_refresh: false }).unwrap();
        assert!(!store.load().auto_refresh);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(PrefsStore::at(path).load(), Preferences::default());
    }
}
