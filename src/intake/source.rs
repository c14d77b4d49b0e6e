/// Where an application was found, inferred from the posting URL.
/// Order matters: the first matching rule wins.
const SOURCE_RULES: &[(&[&str], &str)] = &[
    (&["linkedin.com"], "LinkedIn"),
    (&["indeed.com"], "Indeed"),
    (&["glassdoor.com"], "Glassdoor"),
    (&["wellfound.com", "angel.co"], "Wellfound"),
    (&["lever.co"], "Lever"),
    (&["greenhouse.io", "boards.greenhouse"], "Greenhouse"),
    (&["workday.com", "myworkdayjobs.com"], "Workday"),
    (&["jobright.ai"], "Jobright"),
    (&["handshake"], "Handshake"),
    (&["ziprecruiter.com"], "ZipRecruiter"),
    (&["dice.com"], "Dice"),
    (&["simplyhired.com"], "SimplyHired"),
    (&["monster.com"], "Monster"),
    (&["jobs.", "careers."], "Company Site"),
];

pub const OTHER_SOURCE: &str = "Other";

/// Choices offered by the form after the auto-detected source.
pub const SOURCE_OPTIONS: &[&str] = &[
    "LinkedIn",
    "Indeed",
    "Glassdoor",
    "Wellfound",
    "Greenhouse",
    "Lever",
    "Workday",
    "Jobright",
    "Handshake",
    "ZipRecruiter",
    "Company Site",
    "Referral",
    "Dice",
    "Monster",
    "SimplyHired",
    OTHER_SOURCE,
];

pub fn detect_source(url: &str) -> &'static str {
    SOURCE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| url.contains(n)))
        .map(|(_, source)| *source)
        .unwrap_or(OTHER_SOURCE)
}

/// Detected source first, then the fixed list without duplicates.
pub fn source_choices(detected: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(SOURCE_OPTIONS.len() + 1);
    if !detected.is_empty() {
        out.push(detected.to_string());
    }
    out.extend(
        SOURCE_OPTIONS
            .iter()
            .filter(|s| **s != detected)
            .map(|s| s.to_string()),
    );
    out
}
