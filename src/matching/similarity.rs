/// Similarity in `[0, 1]` between two company names; 1 means identical.
///
/// Comparison is case-insensitive and ignores surrounding whitespace. A name
/// contained in the other scores 0.9 so "Google" still matches "Google LLC";
/// everything else falls back to normalised Levenshtein distance.
pub fn fuzzy_match(a: &str, b: &str) -> f64 {
    let s1 = a.trim().to_lowercase();
    let s2 = b.trim().to_lowercase();

    if s1 == s2 {
        return 1.0;
    }
    if s1.contains(&s2) || s2.contains(&s1) {
        return 0.9;
    }

    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = strsim::levenshtein(&s1, &s2);
    1.0 - distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        for s in ["", "Acme", "  Initech  ", "Société Générale"] {
            assert_eq!(fuzzy_match(s, s), 1.0, "{s:?}");
        }
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(fuzzy_match("  ACME ", "acme"), 1.0);
    }

    #[test]
    fn containment_scores_point_nine() {
        assert!(fuzzy_match("Google", "Google LLC") >= 0.9);
        assert_eq!(fuzzy_match("Google LLC", "google"), 0.9);
    }

    #[test]
    fn one_edit_is_high_but_not_exact() {
        let score = fuzzy_match("Acme Inc", "Acm Inc");
        assert!(score > 0.85 && score < 1.0, "score was {score}");
    }

    #[test]
    fn scoring_is_symmetric() {
        let pairs = [
            ("Acme Inc", "Acm Inc"),
            ("Stripe", "Stripes"),
            ("Initech", "Initrode"),
            ("", "Hooli"),
            ("Pied Piper", "Piper"),
        ];
        for (a, b) in pairs {
            assert_eq!(fuzzy_match(a, b), fuzzy_match(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(fuzzy_match("Initech", "Umbrella") < 0.3);
    }
}
