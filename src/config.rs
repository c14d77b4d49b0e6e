use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BROWSER: &str = "Comet";
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// ID of the Notion database holding job applications.
    pub database_id: String,
    /// Full URL of the database, preferred by `view` when set.
    pub notion_database_url: Option<String>,
    /// Folder holding resume PDFs; `~` is expanded.
    pub resume_folder: Option<String>,
    /// Browser queried for the active tab's URL.
    pub browser: Option<String>,
    pub notion_api_url: Option<String>,
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no config dir available"))?
        .join("job_tracker"))
}

pub fn config_path() -> Result<PathBuf> {
    let mut p = config_dir()?;
    fs::create_dir_all(&p)?;
    p.push("config.toml");
    Ok(p)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        // create a template config for users to edit
        let sample = Config {
            database_id: "YOUR_NOTION_DATABASE_ID".to_string(),
            notion_database_url: None,
            resume_folder: Some("~/Documents/Resumes".to_string()),
            browser: Some(DEFAULT_BROWSER.to_string()),
            notion_api_url: None,
        };
        let tom = toml::to_string_pretty(&sample)?;
        fs::write(path, tom)?;
        return Err(anyhow::anyhow!(
            "Created template config at {} — edit it and run again",
            path.display()
        ));
    }
    let s = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&s)?;
    if cfg.database_id.trim().is_empty() {
        return Err(anyhow::anyhow!("database_id not set in {}", path.display()));
    }
    Ok(cfg)
}

impl Config {
    pub fn browser(&self) -> &str {
        self.browser.as_deref().unwrap_or(DEFAULT_BROWSER)
    }

    pub fn notion_api_url(&self) -> &str {
        self.notion_api_url
            .as_deref()
            .unwrap_or(DEFAULT_NOTION_API_URL)
            .trim_end_matches('/')
    }

    /// Resume folder with `~` expanded, defaulting to `~/Documents/Resumes`.
    pub fn resume_folder(&self) -> Result<PathBuf> {
        match &self.resume_folder {
            Some(p) => expand_home(p),
            None => Ok(home_dir()?.join("Documents").join("Resumes")),
        }
    }

    /// Where `view` sends the user: the configured URL, else the Notion app.
    pub fn database_link(&self) -> String {
        match &self.notion_database_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => format!("notion://notion.so/{}", self.database_id),
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("no home dir available"))
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix('~') {
        Some(rest) => Ok(home_dir()?.join(rest.trim_start_matches('/'))),
        None => Ok(PathBuf::from(path)),
    }
}
