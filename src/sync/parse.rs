use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::email::{EmailStatusUpdate, StatusKind};

static LINE_COMPANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)company[:\s]+([^,]+)").unwrap());
static LINE_STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)status[:\s]+(Interview|Rejected|Offer|Assessment)").unwrap()
});

/// Turn the email classifier's answer into status updates.
///
/// A JSON array of `{"company", "status"}` objects is preferred; entries
/// without a company or with an unknown status are dropped. Text that is not
/// JSON is read line by line (`Company: Acme, Status: Interview`). Anything
/// else yields no updates.
pub fn parse_classifier_output(text: &str) -> Vec<EmailStatusUpdate> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.iter().filter_map(from_json_item).collect(),
        Ok(_) => {
            log::debug!("classifier output is JSON but not an array");
            Vec::new()
        }
        Err(_) => text.lines().filter_map(from_line).collect(),
    }
}

fn from_json_item(item: &Value) -> Option<EmailStatusUpdate> {
    let company = item.get("company")?.as_str()?.trim();
    let status = item.get("status")?.as_str()?;
    if company.is_empty() {
        return None;
    }
    // exact option names only, as the classifier is told to emit them
    let status = StatusKind::ALL.into_iter().find(|k| k.as_str() == status)?;
    Some(EmailStatusUpdate {
        company: company.to_string(),
        status,
    })
}

fn from_line(line: &str) -> Option<EmailStatusUpdate> {
    let company = LINE_COMPANY.captures(line)?.get(1)?.as_str().trim();
    let status = LINE_STATUS.captures(line)?.get(1)?.as_str().parse().ok()?;
    if company.is_empty() {
        return None;
    }
    Some(EmailStatusUpdate {
        company: company.to_string(),
        status,
    })
}
