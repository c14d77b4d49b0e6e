use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

const RESUME_EXTENSION: &str = ".pdf";

/// PDF file names in `folder`, sorted. A missing or unreadable folder is
/// treated as empty.
pub fn list_resumes(folder: &Path) -> Vec<String> {
    let entries = match fs::read_dir(folder) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("no resumes listed from {}: {e}", folder.display());
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.to_lowercase().ends_with(RESUME_EXTENSION))
        .collect();
    names.sort();
    names
}

/// Result of [`archive_resume`].
#[derive(Debug, PartialEq, Eq)]
pub struct Archived {
    pub file_name: String,
    /// False when a file of that name was already in the folder.
    pub copied: bool,
}

/// Copy a dropped resume into `folder` (created if needed) unless a file of
/// the same name is already there. Existing files are never overwritten.
pub fn archive_resume(folder: &Path, dropped: &Path) -> Result<Archived> {
    let file_name = dropped
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("not a file path: {}", dropped.display()))?
        .to_string();

    fs::create_dir_all(folder)
        .with_context(|| format!("cannot create resume folder {}", folder.display()))?;

    let dest = folder.join(&file_name);
    if dest.exists() {
        return Ok(Archived {
            file_name,
            copied: false,
        });
    }

    fs::copy(dropped, &dest)
        .with_context(|| format!("cannot copy {} to {}", dropped.display(), dest.display()))?;
    Ok(Archived {
        file_name,
        copied: true,
    })
}
