use std::fmt;
use std::str::FromStr;

/// Outcome recognised in a recruiting email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Interview,
    Rejected,
    Offer,
    Assessment,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Interview,
        StatusKind::Rejected,
        StatusKind::Offer,
        StatusKind::Assessment,
    ];

    /// Name of the Notion select option for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Interview => "Interview",
            StatusKind::Rejected => "Rejected",
            StatusKind::Offer => "Offer",
            StatusKind::Assessment => "Assessment",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusKind {
    type Err = anyhow::Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown status: {s}"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailMessage {
    pub id: String,
    pub thread_id: String,
    pub subject: String,
    pub from: String,
    pub date: String,
    pub snippet: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ParsedEmail {
    pub email: EmailMessage,
    pub detected_status: Option<StatusKind>,
    pub company_name: Option<String>,
    pub confidence: f64,
}

/// A `{company, status}` pair reported by the email classifier shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailStatusUpdate {
    pub company: String,
    pub status: StatusKind,
}
