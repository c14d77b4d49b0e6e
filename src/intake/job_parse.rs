use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::application::JobInfo;

// Each label runs until the next label or the end of the text.
static ROLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Role:\s*(.+?)(?:\s*\n?\s*Company:|$)").unwrap());
static COMPANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Company:\s*(.+?)(?:\s*\n?\s*Location:|$)").unwrap());
static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Location:\s*(.+?)(?:\s*\n?\s*Timezone:|\s*\n?\s*Job Posting URL:|$)")
        .unwrap()
});
static TIMEZONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Timezone:\s*(.+?)(?:\s*\n?\s*Job Posting URL:|$)").unwrap()
});

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Parse the "Parse Job" shortcut's answer, shaped like
/// `Role: … Company: … Location: … Timezone: … Job Posting URL: …`.
/// Missing labels come back empty.
pub fn parse_job_info(text: &str) -> JobInfo {
    JobInfo {
        role: capture(&ROLE, text),
        company: capture(&COMPANY, text),
        location: capture(&LOCATION, text),
        timezone: capture(&TIMEZONE, text),
    }
}
