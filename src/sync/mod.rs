//! The "sync email status" flow: ask the email classifier shortcut for
//! status changes, bind them to open applications and, once confirmed,
//! write the new statuses back to Notion.

pub mod parse;
pub mod plan;

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::automation::{CHECK_JOB_EMAILS, ShortcutRunner};
use crate::domain::application::PendingUpdate;
use crate::notifier::{Level, Notify};
use crate::notion::ApplicationStore;

pub use parse::parse_classifier_output;
pub use plan::{SYNC_MATCH_THRESHOLD, SyncPlan, plan_updates};

/// Gate before anything is written.
pub trait Confirm {
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Asks on the terminal; anything but "y"/"yes" declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, title: &str, message: &str) -> bool {
        eprintln!("{title}\n{message}\n");
        eprint!("Update all? [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    /// `(company, status)` of each applied update.
    pub applied: Vec<(String, String)>,
    /// `(company, error)` of each failed update.
    pub failed: Vec<(String, String)>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.applied.len() + self.failed.len()
    }

    pub fn summary(&self) -> String {
        if self.applied.is_empty() {
            return "No updates applied".to_string();
        }
        let details: Vec<String> = self
            .applied
            .iter()
            .map(|(company, status)| format!("{company}: {status}"))
            .collect();
        let mut out = format!("Updated {}: {}", self.applied.len(), details.join(", "));
        if !self.failed.is_empty() {
            out.push_str(&format!(" ({} of {} failed)", self.failed.len(), self.total()));
        }
        out
    }
}

#[derive(Debug)]
pub enum SyncOutcome {
    NoUpdates,
    NoApplications,
    NoMatches(SyncPlan),
    Cancelled(SyncPlan),
    Applied(SyncReport),
    Failed(String),
}

pub struct SyncFlow<'a> {
    shortcuts: ShortcutRunner<'a>,
    store: &'a dyn ApplicationStore,
    notifier: &'a dyn Notify,
    confirm: &'a dyn Confirm,
}

impl<'a> SyncFlow<'a> {
    pub fn new(
        shortcuts: ShortcutRunner<'a>,
        store: &'a dyn ApplicationStore,
        notifier: &'a dyn Notify,
        confirm: &'a dyn Confirm,
    ) -> Self {
        Self {
            shortcuts,
            store,
            notifier,
            confirm,
        }
    }

    /// Run one sync. Every failure ends up as a notification.
    pub fn run(&self) -> SyncOutcome {
        match self.try_run() {
            Ok(outcome) => outcome,
            Err(e) => {
                let msg = format!("{e:#}");
                self.notifier
                    .notify(Level::Failure, "Sync failed", Some(&msg));
                SyncOutcome::Failed(msg)
            }
        }
    }

    fn try_run(&self) -> Result<SyncOutcome> {
        self.notifier
            .notify(Level::Progress, "Checking job emails...", None);
        let answer = self.shortcuts.run(&CHECK_JOB_EMAILS).unwrap_or_else(|e| {
            log::warn!("Check Job Emails shortcut failed: {e:#}");
            String::new()
        });
        log::debug!("Check Job Emails answer: {answer:?}");

        let updates = parse_classifier_output(&answer);
        if updates.is_empty() {
            self.hud("No status updates found in emails");
            return Ok(SyncOutcome::NoUpdates);
        }

        let applications = self.store.query_open_applications()?;
        if applications.is_empty() {
            self.hud("No active applications found");
            return Ok(SyncOutcome::NoApplications);
        }

        let plan = plan_updates(&updates, &applications);
        log::info!(
            "{} updates, {} open applications, {} matched",
            plan.email_count,
            plan.application_count,
            plan.pending.len()
        );
        if plan.pending.is_empty() {
            self.hud(&plan.no_match_message());
            return Ok(SyncOutcome::NoMatches(plan));
        }

        if !self
            .confirm
            .confirm(&plan.confirmation_title(), &plan.confirmation_message())
        {
            self.hud("Cancelled");
            return Ok(SyncOutcome::Cancelled(plan));
        }

        let report = self.apply(&plan.pending);
        let level = if report.applied.is_empty() {
            Level::Failure
        } else {
            Level::Success
        };
        self.notifier.notify(level, &report.summary(), None);
        Ok(SyncOutcome::Applied(report))
    }

    /// One failed write does not stop the rest.
    fn apply(&self, pending: &[PendingUpdate]) -> SyncReport {
        let mut report = SyncReport::default();
        for update in pending {
            let status = update.new_status.as_str();
            match self.store.update_status(&update.application_id, status) {
                Ok(()) => report
                    .applied
                    .push((update.application_company.clone(), status.to_string())),
                Err(e) => {
                    log::warn!("Failed to update {}: {e:#}", update.application_company);
                    report
                        .failed
                        .push((update.application_company.clone(), e.to_string()));
                }
            }
        }
        report
    }

    fn hud(&self, title: &str) {
        self.notifier.notify(Level::Success, title, None);
    }
}
