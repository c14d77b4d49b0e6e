use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};

use crate::automation::{Clipboard, Launcher};

/// Run a command to completion and return its trimmed-right stdout.
pub(crate) fn run_capture(program: &str, args: &[&str]) -> Result<String> {
    let out = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {program}"))?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(anyhow!("{program} exited with {}: {}", out.status, stderr.trim()));
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim_end().to_string())
}

/// macOS pasteboard via `pbpaste` / `pbcopy`.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read(&self) -> Result<String> {
        run_capture("pbpaste", &[])
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut child = Command::new("pbcopy")
            .stdin(Stdio::piped())
            .spawn()
            .context("failed to run pbcopy")?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(anyhow!("pbcopy exited with {status}"));
        }
        Ok(())
    }
}

/// `open -g <url>`: hands the URL to its registered app in the background.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        run_capture("open", &["-g", url]).map(|_| ())
    }
}
