use crate::domain::application::{JobApplication, PendingUpdate};
use crate::domain::email::EmailStatusUpdate;
use crate::matching::{find_matching_application, fuzzy_match};

/// Sync matches more loosely than [`crate::matching::DEFAULT_MATCH_THRESHOLD`].
pub const SYNC_MATCH_THRESHOLD: f64 = 0.6;

const UNMATCHED_SHOWN: usize = 10;

/// What a sync run proposes to change, before the user confirms.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    pub pending: Vec<PendingUpdate>,
    pub unmatched: Vec<String>,
    pub email_count: usize,
    pub application_count: usize,
}

/// Bind each update to its best matching application. An application gets
/// at most one pending update: the first update that resolves to it.
pub fn plan_updates(updates: &[EmailStatusUpdate], applications: &[JobApplication]) -> SyncPlan {
    let mut plan = SyncPlan {
        email_count: updates.len(),
        application_count: applications.len(),
        ..Default::default()
    };

    for update in updates {
        let Some(app) =
            find_matching_application(applications, &update.company, fuzzy_match, SYNC_MATCH_THRESHOLD)
        else {
            plan.unmatched.push(update.company.clone());
            continue;
        };

        if plan.pending.iter().any(|p| p.application_id == app.id) {
            log::debug!("{} already has a pending update; skipping {:?}", app.company, update);
            continue;
        }

        plan.pending.push(PendingUpdate {
            email_update: update.clone(),
            application_id: app.id.clone(),
            application_company: app.company.clone(),
            application_role: app.role.clone(),
            new_status: update.status,
        });
    }

    plan
}

impl SyncPlan {
    pub fn confirmation_title(&self) -> String {
        format!("Update {} Application(s)?", self.pending.len())
    }

    pub fn confirmation_message(&self) -> String {
        let lines: Vec<String> = self
            .pending
            .iter()
            .map(|u| format!("• {} → {}", u.application_company, u.new_status))
            .collect();

        format!(
            "{}\n\n({} matched, {} unmatched from {} emails)",
            lines.join("\n"),
            self.pending.len(),
            self.unmatched.len(),
            self.email_count
        )
    }

    pub fn no_match_message(&self) -> String {
        let shown: Vec<&str> = self
            .unmatched
            .iter()
            .take(UNMATCHED_SHOWN)
            .map(String::as_str)
            .collect();
        format!(
            "No matches found. Emails: {}, Notion apps: {}. Unmatched: {}",
            self.email_count,
            self.application_count,
            shown.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::StatusKind;

    fn app(id: &str, company: &str) -> JobApplication {
        JobApplication {
            id: id.into(),
            company: company.into(),
            role: format!("{company} role"),
            status: "Applied".into(),
            date_applied: String::new(),
        }
    }

    fn update(company: &str, status: StatusKind) -> EmailStatusUpdate {
        EmailStatusUpdate {
            company: company.into(),
            status,
        }
    }

    #[test]
    fn duplicate_mentions_yield_one_pending_update() {
        let apps = vec![app("a1", "Acme Corp"), app("h1", "Hooli")];
        let updates = vec![
            update("Acme", StatusKind::Interview),
            update("ACME CORP", StatusKind::Rejected),
            update("Hooli", StatusKind::Offer),
        ];

        let plan = plan_updates(&updates, &apps);
        assert_eq!(plan.pending.len(), 2);
        assert_eq!(plan.pending[0].application_id, "a1");
        assert_eq!(plan.pending[0].new_status, StatusKind::Interview);
        assert_eq!(plan.pending[0].application_role, "Acme Corp role");
        assert_eq!(plan.pending[1].application_id, "h1");
        assert!(plan.unmatched.is_empty());
    }

    #[test]
    fn unmatched_companies_are_collected() {
        let apps = vec![app("a1", "Acme Corp")];
        let updates = vec![
            update("Umbrella", StatusKind::Rejected),
            update("Acme", StatusKind::Offer),
        ];

        let plan = plan_updates(&updates, &apps);
        assert_eq!(plan.unmatched, vec!["Umbrella"]);
        assert_eq!(plan.pending.len(), 1);
        assert_eq!(
            plan.confirmation_message(),
            "• Acme Corp → Offer\n\n(1 matched, 1 unmatched from 2 emails)"
        );
        assert_eq!(plan.confirmation_title(), "Update 1 Application(s)?");
    }

    #[test]
    fn no_match_message_lists_at_most_ten() {
        let apps = vec![app("a1", "Acme Corp")];
        let updates: Vec<_> = (0..12)
            .map(|i| update(&format!("Zz{i}"), StatusKind::Rejected))
            .collect();

        let plan = plan_updates(&updates, &apps);
        assert!(plan.pending.is_empty());
        let msg = plan.no_match_message();
        assert!(msg.starts_with("No matches found. Emails: 12, Notion apps: 1. Unmatched: Zz0, "));
        assert!(msg.ends_with("Zz9"));
    }
}
