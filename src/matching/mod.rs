//! Pure text heuristics that decide which status update applies to which
//! tracked application. Nothing in here performs I/O.

pub mod company;
pub mod matcher;
pub mod similarity;
pub mod status;

use crate::domain::email::{EmailMessage, ParsedEmail};

pub use company::extract_company_name;
pub use matcher::{DEFAULT_MATCH_THRESHOLD, find_matching_application};
pub use similarity::fuzzy_match;
pub use status::{StatusDetection, detect_status};

/// Classify one email and guess which company it came from.
pub fn parse_email(email: EmailMessage) -> ParsedEmail {
    let detection = detect_status(&email.subject, &email.snippet, email.body.as_deref());
    let company_name = extract_company_name(&email.from, &email.subject);

    ParsedEmail {
        email,
        detected_status: detection.status,
        company_name,
        confidence: detection.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::StatusKind;

    #[test]
    fn parse_email_combines_status_and_company() {
        let email = EmailMessage {
            id: "m1".into(),
            thread_id: "t1".into(),
            subject: "Interview invitation".into(),
            from: "Globex Recruiting <jobs@globex.com>".into(),
            date: "Mon, 5 Oct 2026 10:00:00 +0000".into(),
            snippet: "We would like to schedule a call".into(),
            body: None,
        };

        let parsed = parse_email(email);
        assert_eq!(parsed.detected_status, Some(StatusKind::Interview));
        assert_eq!(parsed.company_name.as_deref(), Some("Globex"));
        assert_eq!(parsed.confidence, 0.9);
        assert_eq!(parsed.email.id, "m1");
    }
}
