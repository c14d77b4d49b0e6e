use anyhow::Result;
use notify_rust::Notification;

const APP_NAME: &str = "Job Tracker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Work in progress; never raised as a desktop notification.
    Progress,
    Success,
    Failure,
}

/// Short-lived user-facing messages.
pub trait Notify {
    fn notify(&self, level: Level, title: &str, message: Option<&str>);
}

/// "title: message", or the bare title.
pub fn notification_line(title: &str, message: Option<&str>) -> String {
    match message {
        Some(m) => format!("{title}: {m}"),
        None => title.to_string(),
    }
}

/// End of the line for a command's error: it becomes a failure
/// notification and goes no further.
pub fn report_failure(notifier: &dyn Notify, title: &str, result: Result<()>) {
    if let Err(e) = result {
        notifier.notify(Level::Failure, title, Some(&format!("{e:#}")));
    }
}

pub struct Notifier {
    /// Also print to stderr. Off while the terminal UI owns the screen.
    echo: bool,
}

impl Notifier {
    pub fn new() -> Self {
        Self { echo: true }
    }

    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Notifier {
    fn notify(&self, level: Level, title: &str, message: Option<&str>) {
        let line = notification_line(title, message);
        match level {
            Level::Failure => log::warn!("{line}"),
            _ => log::info!("{line}"),
        }
        if self.echo {
            eprintln!("{line}");
        }

        if level == Level::Progress {
            return;
        }

        let mut n = Notification::new();
        n.appname(APP_NAME).summary(title);
        if let Some(m) = message {
            n.body(m);
        }
        if let Err(e) = n.show() {
            log::debug!("Notification error: {e}");
        }
    }
}
