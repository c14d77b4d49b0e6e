use once_cell::sync::Lazy;
use regex::Regex;

static DISPLAY_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s*<").unwrap());

static ROLE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Recruiting|Talent|HR|Careers|Jobs)\s*(at|@|-|from)?\s*").unwrap()
});

static ROLE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(Recruiting|Talent Acquisition|HR|Careers|Jobs)$").unwrap()
});

static SENDER_DOMAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@([a-zA-Z0-9-]+)\.").unwrap());

static SUBJECT_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:at|from|with)\s+([A-Z][a-zA-Z0-9\s&]+?)(?:\s*[-–—]|\s+for|\s+regarding|$)")
        .unwrap()
});

/// Mail providers and applicant-tracking systems whose domain says nothing
/// about the hiring company.
const GENERIC_DOMAINS: &[&str] = &[
    "gmail",
    "yahoo",
    "outlook",
    "hotmail",
    "greenhouse",
    "lever",
    "workday",
];

/// Best-effort guess of the hiring company behind an email.
///
/// Tries, in order: the sender's display name with recruiting boilerplate
/// removed, the sender's domain label, then an "at/from/with <Company>"
/// phrase in the subject.
pub fn extract_company_name(from: &str, subject: &str) -> Option<String> {
    from_display_name(from)
        .or_else(|| from_domain(from))
        .or_else(|| from_subject(subject))
}

fn from_display_name(from: &str) -> Option<String> {
    let name = DISPLAY_NAME.captures(from)?.get(1)?.as_str().trim();
    let name = ROLE_PREFIX.replace(name, "");
    let name = ROLE_SUFFIX.replace(&name, "");
    let name = name.trim();

    (name.chars().count() > 1).then(|| name.to_string())
}

fn from_domain(from: &str) -> Option<String> {
    let label = SENDER_DOMAIN.captures(from)?.get(1)?.as_str();
    if GENERIC_DOMAINS.contains(&label.to_lowercase().as_str()) {
        return None;
    }

    let mut chars = label.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
}

fn from_subject(subject: &str) -> Option<String> {
    let company = SUBJECT_COMPANY.captures(subject)?.get(1)?.as_str();
    Some(company.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_recruiting_prefix_from_display_name() {
        assert_eq!(
            extract_company_name("Recruiting at Acme <hr@acme.com>", "..."),
            Some("Acme".to_string())
        );
    }

    #[test]
    fn strips_talent_acquisition_suffix() {
        assert_eq!(
            extract_company_name("Umbrella Talent Acquisition <no-reply@umbrella.com>", ""),
            Some("Umbrella".to_string())
        );
    }

    #[test]
    fn generic_domain_falls_through_to_subject() {
        assert_eq!(
            extract_company_name("jane@gmail.com", "Interview for Backend role at Initech"),
            Some("Initech".to_string())
        );
    }

    #[test]
    fn company_domain_is_capitalised() {
        assert_eq!(
            extract_company_name("no-reply@hooli.com", "Thanks for applying"),
            Some("Hooli".to_string())
        );
    }

    #[test]
    fn boilerplate_only_display_name_uses_domain() {
        // "Careers" strips to nothing, so the domain label is used instead.
        assert_eq!(
            extract_company_name("Careers <careers@initrode.io>", ""),
            Some("Initrode".to_string())
        );
    }

    #[test]
    fn subject_company_stops_at_dash() {
        assert_eq!(
            extract_company_name("alerts@lever.co", "Update from Pied Piper - Platform Engineer"),
            Some("Pied Piper".to_string())
        );
    }

    #[test]
    fn nothing_recognisable_returns_none() {
        assert_eq!(extract_company_name("someone@gmail.com", "Hello there"), None);
        assert_eq!(extract_company_name("", ""), None);
    }
}
