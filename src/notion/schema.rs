//! Mapping between Notion's loosely typed page properties and our records.
//! Nothing outside this module looks at raw property JSON.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::application::{JobApplication, NewApplication, OPEN_STATUSES, STATUS_APPLIED};

pub const PAGE_SIZE: u32 = 100;

pub const PROP_COMPANY: &str = "Company";
pub const PROP_ROLE: &str = "Role";
pub const PROP_DATE_APPLIED: &str = "Date Applied";
pub const PROP_DAY: &str = "Day";
pub const PROP_STATUS: &str = "Status";
pub const PROP_LOCATION: &str = "Location";
pub const PROP_SOURCE: &str = "Source";
pub const PROP_RESUME: &str = "Resume";

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    /// Absent on partial page objects.
    pub properties: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Select { select: Option<SelectOption> },
    Date { date: Option<DateValue> },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct RichText {
    #[serde(default)]
    plain_text: String,
}

#[derive(Debug, Deserialize)]
struct SelectOption {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct DateValue {
    #[serde(default)]
    start: String,
}

fn property(props: &HashMap<String, Value>, name: &str) -> Option<PropertyValue> {
    let raw = props.get(name)?;
    match serde_json::from_value(raw.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("unexpected shape for property {name:?}: {e}");
            None
        }
    }
}

fn join_plain(parts: &[RichText]) -> String {
    parts.iter().map(|t| t.plain_text.as_str()).collect()
}

fn title_text(props: &HashMap<String, Value>, name: &str) -> String {
    match property(props, name) {
        Some(PropertyValue::Title { title }) => join_plain(&title),
        _ => String::new(),
    }
}

fn rich_text(props: &HashMap<String, Value>, name: &str) -> String {
    match property(props, name) {
        Some(PropertyValue::RichText { rich_text }) => join_plain(&rich_text),
        _ => String::new(),
    }
}

fn select_name(props: &HashMap<String, Value>, name: &str) -> String {
    match property(props, name) {
        Some(PropertyValue::Select { select: Some(opt) }) => opt.name,
        _ => String::new(),
    }
}

fn date_start(props: &HashMap<String, Value>, name: &str) -> String {
    match property(props, name) {
        Some(PropertyValue::Date { date: Some(d) }) => d.start,
        _ => String::new(),
    }
}

/// Typed view of a database page. Pages without properties are skipped;
/// properties of the wrong type read as empty.
pub fn to_application(page: Page) -> Option<JobApplication> {
    let props = page.properties?;
    Some(JobApplication {
        id: page.id,
        company: title_text(&props, PROP_COMPANY),
        role: rich_text(&props, PROP_ROLE),
        status: select_name(&props, PROP_STATUS),
        date_applied: date_start(&props, PROP_DATE_APPLIED),
    })
}

pub fn open_applications_query(start_cursor: Option<&str>) -> Value {
    let filters: Vec<Value> = OPEN_STATUSES
        .iter()
        .map(|status| json!({ "property": PROP_STATUS, "select": { "equals": status } }))
        .collect();

    let mut body = json!({
        "filter": { "or": filters },
        "page_size": PAGE_SIZE,
    });
    if let Some(cursor) = start_cursor {
        body["start_cursor"] = json!(cursor);
    }
    body
}

pub fn status_update(status: &str) -> Value {
    json!({
        "properties": {
            PROP_STATUS: { "select": { "name": status } }
        }
    })
}

fn text_property(content: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": content } }] })
}

pub fn create_page(database_id: &str, app: &NewApplication) -> Value {
    let link = app
        .source_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(|url| json!({ "url": url }));

    let mut properties = json!({
        PROP_COMPANY: { "title": [{ "text": { "content": app.company } }] },
        PROP_ROLE: text_property(&app.role),
        PROP_DATE_APPLIED: { "date": { "start": app.date_applied } },
        PROP_DAY: text_property(&app.day),
        PROP_STATUS: { "select": { "name": STATUS_APPLIED } },
        PROP_LOCATION: text_property(&app.location),
        PROP_SOURCE: {
            "rich_text": [{ "text": { "content": app.source, "link": link } }]
        },
    });

    // Notion rejects file:// links, so the resume is recorded by name only.
    if let Some(resume) = app.resume.as_deref().filter(|r| !r.is_empty()) {
        properties[PROP_RESUME] = text_property(resume);
    }

    json!({
        "parent": { "database_id": database_id },
        "properties": properties,
    })
}
