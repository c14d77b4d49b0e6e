use crate::domain::email::StatusKind;

/// Ordered `(status, keyword)` rules. The first keyword found in an email
/// decides its status, so position in this table is the priority: all
/// Interview phrases outrank all Rejected phrases, and so on.
///
/// Keywords must be lowercase.
// NOTE: "decided to move forward with" sits under Rejected on purpose; it is
// usually followed by "other candidates". Do not move it without product input.
pub const STATUS_RULES: &[(StatusKind, &str)] = &[
    (StatusKind::Interview, "schedule interview"),
    (StatusKind::Interview, "interview invitation"),
    (StatusKind::Interview, "phone screen"),
    (StatusKind::Interview, "technical interview"),
    (StatusKind::Interview, "onsite interview"),
    (StatusKind::Interview, "virtual interview"),
    (StatusKind::Interview, "video interview"),
    (StatusKind::Interview, "interview request"),
    (StatusKind::Interview, "would like to schedule"),
    (StatusKind::Interview, "next steps in the interview"),
    (StatusKind::Interview, "move forward with an interview"),
    (StatusKind::Interview, "invite you to interview"),
    (StatusKind::Interview, "discuss your application"),
    (StatusKind::Interview, "speak with you"),
    (StatusKind::Interview, "meet with our team"),
    (StatusKind::Rejected, "unfortunately"),
    (StatusKind::Rejected, "regret to inform"),
    (StatusKind::Rejected, "not moving forward"),
    (StatusKind::Rejected, "other candidates"),
    (StatusKind::Rejected, "decided not to proceed"),
    (StatusKind::Rejected, "will not be moving forward"),
    (StatusKind::Rejected, "not a fit"),
    (StatusKind::Rejected, "position has been filled"),
    (StatusKind::Rejected, "pursue other candidates"),
    (StatusKind::Rejected, "not selected"),
    (StatusKind::Rejected, "after careful consideration"),
    (StatusKind::Rejected, "decided to move forward with"),
    (StatusKind::Rejected, "not the right match"),
    (StatusKind::Rejected, "competitive applicant pool"),
    (StatusKind::Offer, "offer letter"),
    (StatusKind::Offer, "pleased to offer"),
    (StatusKind::Offer, "congratulations"),
    (StatusKind::Offer, "extend an offer"),
    (StatusKind::Offer, "job offer"),
    (StatusKind::Offer, "offer of employment"),
    (StatusKind::Offer, "welcome to the team"),
    (StatusKind::Offer, "excited to have you join"),
    (StatusKind::Offer, "start date"),
    (StatusKind::Offer, "compensation package"),
    (StatusKind::Assessment, "coding challenge"),
    (StatusKind::Assessment, "take-home"),
    (StatusKind::Assessment, "assessment"),
    (StatusKind::Assessment, "technical test"),
    (StatusKind::Assessment, "skills test"),
    (StatusKind::Assessment, "online test"),
    (StatusKind::Assessment, "complete the following"),
    (StatusKind::Assessment, "hackerrank"),
    (StatusKind::Assessment, "codility"),
    (StatusKind::Assessment, "codesignal"),
    (StatusKind::Assessment, "leetcode"),
];

const SUBJECT_CONFIDENCE: f64 = 0.9;
const CONTENT_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusDetection {
    pub status: Option<StatusKind>,
    pub confidence: f64,
}

impl StatusDetection {
    pub const NONE: StatusDetection = StatusDetection {
        status: None,
        confidence: 0.0,
    };
}

/// Best-guess status of an email from its subject, snippet and body.
pub fn detect_status(subject: &str, snippet: &str, body: Option<&str>) -> StatusDetection {
    detect_with_rules(STATUS_RULES, subject, snippet, body)
}

fn detect_with_rules(
    rules: &[(StatusKind, &str)],
    subject: &str,
    snippet: &str,
    body: Option<&str>,
) -> StatusDetection {
    let content = format!("{subject} {snippet} {}", body.unwrap_or_default()).to_lowercase();
    let subject = subject.to_lowercase();

    rules
        .iter()
        .find(|(_, keyword)| content.contains(keyword))
        .map(|&(status, keyword)| StatusDetection {
            status: Some(status),
            confidence: if subject.contains(keyword) {
                SUBJECT_CONFIDENCE
            } else {
                CONTENT_CONFIDENCE
            },
        })
        .unwrap_or(StatusDetection::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_in_subject_gives_high_confidence() {
        let d = detect_status("Unfortunately, after careful consideration", "", None);
        assert_eq!(d.status, Some(StatusKind::Rejected));
        assert_eq!(d.confidence, 0.9);
    }

    #[test]
    fn keyword_only_in_body_gives_lower_confidence() {
        let d = detect_status(
            "Your application to Initech",
            "Hi Sam,",
            Some("We are pleased to offer you the position."),
        );
        assert_eq!(d.status, Some(StatusKind::Offer));
        assert_eq!(d.confidence, 0.7);
    }

    #[test]
    fn unrelated_text_has_no_status() {
        let d = detect_status("Thanks for your newsletter signup", "", None);
        assert_eq!(d, StatusDetection::NONE);
    }

    #[test]
    fn earlier_status_kind_wins_over_later() {
        // Both an Interview and a Rejected phrase; Interview is checked first.
        let d = detect_status(
            "Unfortunately we must reschedule",
            "We would like to schedule a phone screen instead",
            None,
        );
        assert_eq!(d.status, Some(StatusKind::Interview));
        assert_eq!(d.confidence, 0.7);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let d = detect_status("Your HACKERRANK Invite", "", None);
        assert_eq!(d.status, Some(StatusKind::Assessment));
        assert_eq!(d.confidence, 0.9);
    }

    #[test]
    fn priority_follows_table_position() {
        let rules = [
            (StatusKind::Offer, "congratulations"),
            (StatusKind::Interview, "phone screen"),
        ];
        let d = detect_with_rules(&rules, "Congratulations! Phone screen next", "", None);
        assert_eq!(d.status, Some(StatusKind::Offer));
    }

    #[test]
    fn rule_table_is_lowercase_and_ordered_by_kind() {
        assert!(STATUS_RULES.iter().all(|(_, k)| *k == k.to_lowercase()));

        let mut kinds: Vec<StatusKind> = STATUS_RULES.iter().map(|(s, _)| *s).collect();
        kinds.dedup();
        assert_eq!(kinds, StatusKind::ALL.to_vec());
    }
}
