//! The "log application" flow: read the posting open in the browser, let the
//! user correct the parsed details, then write one record to Notion.

pub mod job_parse;
pub mod resumes;
pub mod source;

use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::automation::{BrowserProbe, PARSE_JOB, ShortcutRunner};
use crate::domain::application::{JobInfo, NewApplication};
use crate::notifier::{Level, Notify, notification_line};
use crate::notion::ApplicationStore;
use crate::prefs::{Preferences, PrefsStore};

pub use job_parse::parse_job_info;
pub use source::{detect_source, source_choices};

const UNKNOWN_COMPANY: &str = "Unknown Company";
const UNKNOWN_ROLE: &str = "Unknown Role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
    Submitted,
    Cancelled,
}

impl FlowState {
    pub fn is_finished(&self) -> bool {
        matches!(self, FlowState::Submitted | FlowState::Cancelled)
    }
}

/// Editable values of the intake form.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub company: String,
    pub role: String,
    pub location: String,
    pub timezone: String,
    pub source: String,
    pub url: String,
    pub resumes: Vec<String>,
    /// Index into `resumes`; `None` means no existing resume.
    pub selected_resume: Option<usize>,
    /// Path of a resume file to add to the archive. Wins over the selection.
    pub dropped_resume: String,
}

impl IntakeForm {
    pub fn apply_job_info(&mut self, info: JobInfo) {
        self.company = non_empty_or(info.company, UNKNOWN_COMPANY);
        self.role = non_empty_or(info.role, UNKNOWN_ROLE);
        self.location = info.location;
        self.timezone = info.timezone;
    }

    pub fn set_resumes(&mut self, resumes: Vec<String>) {
        self.selected_resume = if resumes.is_empty() { None } else { Some(0) };
        self.resumes = resumes;
    }

    pub fn selected_resume_name(&self) -> Option<&str> {
        self.selected_resume
            .and_then(|i| self.resumes.get(i))
            .map(String::as_str)
    }

    /// "Location (Timezone)", or just the location when no timezone is known.
    pub fn location_with_timezone(&self) -> String {
        let location = self.location.trim();
        let timezone = self.timezone.trim();
        if timezone.is_empty() {
            location.to_string()
        } else {
            format!("{location} ({timezone})")
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

pub struct IntakeSession<'a> {
    browser: &'a dyn BrowserProbe,
    shortcuts: ShortcutRunner<'a>,
    store: &'a dyn ApplicationStore,
    notifier: &'a dyn Notify,
    prefs_store: &'a PrefsStore,
    resume_folder: PathBuf,

    pub prefs: Preferences,
    pub form: IntakeForm,
    pub state: FlowState,
    /// Last message shown to the user, for the form's status line.
    pub status: Option<(Level, String)>,
}

impl<'a> IntakeSession<'a> {
    pub fn new(
        browser: &'a dyn BrowserProbe,
        shortcuts: ShortcutRunner<'a>,
        store: &'a dyn ApplicationStore,
        notifier: &'a dyn Notify,
        prefs_store: &'a PrefsStore,
        resume_folder: PathBuf,
    ) -> Self {
        Self {
            browser,
            shortcuts,
            store,
            notifier,
            prefs: prefs_store.load(),
            prefs_store,
            resume_folder,
            form: IntakeForm::default(),
            state: FlowState::Idle,
            status: None,
        }
    }

    pub fn resume_folder(&self) -> &Path {
        &self.resume_folder
    }

    fn report(&mut self, level: Level, title: &str, message: Option<&str>) {
        self.notifier.notify(level, title, message);
        self.status = Some((level, notification_line(title, message)));
    }

    /// First load when the form opens. With auto-refresh off only the URL
    /// and source are read; the posting is not parsed.
    pub fn open(&mut self) {
        self.load(self.prefs.auto_refresh);
    }

    /// Re-read the URL and parse the posting regardless of auto-refresh.
    pub fn refresh(&mut self) {
        self.load(true);
    }

    fn load(&mut self, parse_posting: bool) {
        self.state = FlowState::Loading;
        self.form.set_resumes(resumes::list_resumes(&self.resume_folder));

        let url = match self.browser.active_tab_url() {
            Ok(url) => url,
            Err(e) => {
                self.report(Level::Failure, "Error", Some(&e.to_string()));
                self.state = FlowState::Error;
                return;
            }
        };
        self.form.source = detect_source(&url).to_string();
        self.form.url = url;

        if parse_posting {
            self.parse_posting();
        }
        self.state = FlowState::Ready;
    }

    fn parse_posting(&mut self) {
        self.report(Level::Progress, "Parsing job with AI...", None);
        let answer = self.shortcuts.run(&PARSE_JOB).unwrap_or_else(|e| {
            log::warn!("Parse Job shortcut failed: {e:#}");
            String::new()
        });
        log::debug!("Parse Job answer: {answer:?}");

        self.form.apply_job_info(parse_job_info(&answer));
        self.report(Level::Success, "Job parsed!", None);
    }

    /// True when auto-refresh is on and the browser has moved to another
    /// page since the form was loaded. Probe failures count as unchanged.
    pub fn url_changed(&self) -> bool {
        if !self.prefs.auto_refresh || self.form.url.is_empty() {
            return false;
        }
        match self.browser.active_tab_url() {
            Ok(current) => current != self.form.url,
            Err(_) => false,
        }
    }

    pub fn toggle_auto_refresh(&mut self) {
        self.prefs.auto_refresh = !self.prefs.auto_refresh;
        if let Err(e) = self.prefs_store.save(&self.prefs) {
            self.report(
                Level::Failure,
                "Could not save preference",
                Some(&e.to_string()),
            );
        }
    }

    pub fn cancel(&mut self) {
        self.state = FlowState::Cancelled;
    }

    /// Log the application. Failures are reported and leave the form open.
    pub fn submit(&mut self) {
        if let Err(e) = self.submit_at(Local::now()) {
            self.report(
                Level::Failure,
                "Failed to log application",
                Some(&format!("{e:#}")),
            );
        }
    }

    fn submit_at(&mut self, now: DateTime<Local>) -> Result<()> {
        let resume = self.resolve_resume()?;
        let app = self.new_application(resume, now);

        self.report(Level::Progress, "Logging to Notion...", None);
        self.store.create_application(&app)?;
        self.report(Level::Success, "Logged!", None);
        self.state = FlowState::Submitted;

        // Warm up the parse for the next posting; nothing waits on it.
        if let Err(e) = self.shortcuts.trigger(&PARSE_JOB) {
            log::warn!("could not launch Parse Job: {e:#}");
        }
        Ok(())
    }

    fn resolve_resume(&mut self) -> Result<Option<String>> {
        let dropped = self.form.dropped_resume.trim();
        if !dropped.is_empty() {
            let archived = resumes::archive_resume(&self.resume_folder, Path::new(dropped))?;
            if archived.copied {
                self.report(Level::Success, "Resume copied to folder", None);
            }
            return Ok(Some(archived.file_name));
        }
        Ok(self.form.selected_resume_name().map(str::to_string))
    }

    fn new_application(&self, resume: Option<String>, now: DateTime<Local>) -> NewApplication {
        let url = self.form.url.trim();
        NewApplication {
            company: self.form.company.trim().to_string(),
            role: self.form.role.trim().to_string(),
            location: self.form.location_with_timezone(),
            source: self.form.source.clone(),
            source_url: (!url.is_empty()).then(|| url.to_string()),
            resume,
            date_applied: now.to_rfc3339(),
            day: now.format("%A").to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use anyhow::{Result, anyhow};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::automation::BrowserProbe;

    /// Returns scripted URLs in order, repeating the last one.
    #[derive(Default)]
    pub struct ScriptedBrowser {
        pub urls: RefCell<VecDeque<Option<String>>>,
        pub last: RefCell<Option<String>>,
    }

    impl ScriptedBrowser {
        pub fn showing(urls: &[Option<&str>]) -> Self {
            Self {
                urls: RefCell::new(urls.iter().map(|u| u.map(str::to_string)).collect()),
                ..Default::default()
            }
        }
    }

    impl BrowserProbe for ScriptedBrowser {
        fn active_tab_url(&self) -> Result<String> {
            if let Some(next) = self.urls.borrow_mut().pop_front() {
                *self.last.borrow_mut() = next;
            }
            self.last
                .borrow()
                .clone()
                .ok_or_else(|| anyhow!("Could not get browser URL. Make sure Comet is open with a tab."))
        }
    }
}
