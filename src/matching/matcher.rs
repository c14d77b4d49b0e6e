use crate::domain::application::JobApplication;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Pick the application whose company best matches `company`.
///
/// A candidate must score strictly above `threshold` and strictly above the
/// best seen so far, so on a tie the earlier application in `applications`
/// is kept.
pub fn find_matching_application<'a, F>(
    applications: &'a [JobApplication],
    company: &str,
    scorer: F,
    threshold: f64,
) -> Option<&'a JobApplication>
where
    F: Fn(&str, &str) -> f64,
{
    let mut best: Option<&JobApplication> = None;
    let mut best_score = 0.0;

    for app in applications {
        let score = scorer(&app.company, company);
        if score > threshold && score > best_score {
            best_score = score;
            best = Some(app);
        }
    }

    best
}
