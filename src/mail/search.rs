/// Senders that usually carry application updates.
pub const JOB_PLATFORM_DOMAINS: &[&str] = &[
    "greenhouse.io",
    "lever.co",
    "workday.com",
    "myworkdayjobs.com",
    "ashbyhq.com",
    "icims.com",
    "jobvite.com",
    "smartrecruiters.com",
    "taleo.net",
    "brassring.com",
    "ultipro.com",
    "successfactors.com",
    "linkedin.com",
    "indeed.com",
];

pub const DEFAULT_DAYS_BACK: u32 = 14;

/// Gmail search for recent recruiting mail, for the "Check Job Emails"
/// shortcut to run.
pub fn build_gmail_search_query(days_back: u32) -> String {
    let from: Vec<String> = JOB_PLATFORM_DOMAINS
        .iter()
        .map(|d| format!("from:{d}"))
        .collect();
    format!(
        "({} OR subject:(application OR interview OR offer)) newer_than:{days_back}d",
        from.join(" OR ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_covers_platforms_and_window() {
        let q = build_gmail_search_query(DEFAULT_DAYS_BACK);
        assert!(q.starts_with("(from:greenhouse.io OR from:lever.co OR "));
        assert!(q.ends_with(" OR from:indeed.com OR subject:(application OR interview OR offer)) newer_than:14d"));
    }
}
