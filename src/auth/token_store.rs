use anyhow::{Result, anyhow};
use keyring::{Entry, Error as KeyringError};

const SERVICE: &str = "job_tracker";
const NOTION_USER: &str = "notion";
const TOKEN_ENV: &str = "NOTION_TOKEN";

/// Save the Notion integration token into the OS keyring
pub fn save_notion_token(token: &str) -> Result<()> {
    let entry = Entry::new(SERVICE, NOTION_USER);
    entry?
        .set_password(token)
        .map_err(|e| anyhow!(e.to_string()))?;
    Ok(())
}

/// Load the Notion integration token from the keyring
pub fn load_notion_token() -> Result<Option<String>> {
    let entry = Entry::new(SERVICE, NOTION_USER);
    match entry?.get_password() {
        Ok(v) => Ok(Some(v)),
        Err(KeyringError::NoEntry) => Ok(None),
        Err(e) => Err(anyhow!(e.to_string())),
    }
}

/// Keyring first, then `NOTION_TOKEN`.
pub fn resolve_notion_token() -> Result<String> {
    let from_keyring = match load_notion_token() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("keyring unavailable, falling back to {TOKEN_ENV}: {e}");
            None
        }
    };

    from_keyring
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            anyhow!("no Notion token found; run `job_tracker set-notion-token` or set {TOKEN_ENV}")
        })
}
