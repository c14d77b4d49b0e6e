use crate::domain::email::{EmailStatusUpdate, StatusKind};

pub type ApplicationId = String;

/// Status every newly logged application starts in.
pub const STATUS_APPLIED: &str = "Applied";

/// Statuses still considered open when syncing from email.
pub const OPEN_STATUSES: [&str; 3] = [STATUS_APPLIED, "Interview", "Offer"];

/// A tracked application, as read from the Notion database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub company: String,
    pub role: String,
    pub status: String,
    pub date_applied: String,
}

/// Job details parsed from a posting by the "Parse Job" shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobInfo {
    pub role: String,
    pub company: String,
    pub location: String,
    pub timezone: String,
}

/// The record written to Notion when an application is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub location: String,
    pub source: String,
    pub source_url: Option<String>,
    pub resume: Option<String>,
    /// RFC 3339 timestamp.
    pub date_applied: String,
    pub day: String,
}

/// A detected status change bound to exactly one tracked application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub email_update: EmailStatusUpdate,
    pub application_id: ApplicationId,
    pub application_company: String,
    pub application_role: String,
    pub new_status: StatusKind,
}
