use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use job_tracker::auth::token_store;
use job_tracker::automation::{AppleScriptBrowser, ShortcutRunner, SystemClipboard, SystemLauncher};
use job_tracker::config::load_config;
use job_tracker::intake::{FlowState, IntakeSession};
use job_tracker::mail::eml::read_eml;
use job_tracker::mail::search::{DEFAULT_DAYS_BACK, build_gmail_search_query};
use job_tracker::matching::parse_email;
use job_tracker::notifier::{Level, Notifier, Notify, report_failure};
use job_tracker::notion::NotionClient;
use job_tracker::prefs::PrefsStore;
use job_tracker::sync::{StdinConfirm, SyncFlow};
use job_tracker::terminal::run_intake;

#[derive(Parser)]
#[command(name = "job_tracker")]
#[command(about = "Log job applications to Notion and sync their status from email", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log the posting open in the browser
    Log,

    /// Update application statuses from recent job emails
    Sync,

    /// Open the Notion database
    View,

    /// Store the Notion integration token in keyring
    SetNotionToken,

    /// Classify saved .eml files without touching Notion
    Classify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the Gmail search used to find job emails
    SearchQuery {
        #[arg(long, default_value_t = DEFAULT_DAYS_BACK)]
        days: u32,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let notifier = Notifier::new();

    match cli.cmd {
        Command::SetNotionToken => {
            report_failure(&notifier, "Could not save token", set_notion_token())
        }

        Command::SearchQuery { days } => println!("{}", build_gmail_search_query(days)),

        Command::Classify { files } => {
            report_failure(&notifier, "Could not classify email", classify(&files))
        }

        Command::View => {
            let result = load_config()
                .map_err(|e| anyhow!("Configuration error: {e}"))
                .and_then(|cfg| {
                    notifier.notify(Level::Success, "Opening Job Tracker...", None);
                    open::that(cfg.database_link()).context("could not open Notion")
                });
            report_failure(&notifier, "Failed to open Notion", result)
        }

        Command::Sync => report_failure(&notifier, "Sync failed", sync(&notifier)),

        Command::Log => {
            // the form owns the screen; keep notifications off stderr
            let quiet = Notifier::new().quiet();
            report_failure(&notifier, "Error", log_application(&quiet))
        }
    }
}

fn set_notion_token() -> Result<()> {
    eprintln!("Paste Notion integration token (end with Ctrl-D):");
    let mut token = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut token)?;
    let token = token.trim();
    if token.is_empty() {
        return Err(anyhow!("empty token"));
    }
    token_store::save_notion_token(token)?;
    println!("Saved Notion token");
    Ok(())
}

fn log_application(notifier: &Notifier) -> Result<()> {
    let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
    let store = NotionClient::from_config(&cfg)?;
    let prefs = PrefsStore::open_default()?;
    let browser = AppleScriptBrowser::new(cfg.browser());
    let clipboard = SystemClipboard;
    let launcher = SystemLauncher;

    let mut session = IntakeSession::new(
        &browser,
        ShortcutRunner::new(&clipboard, &launcher),
        &store,
        notifier,
        &prefs,
        cfg.resume_folder()?,
    );

    match run_intake(&mut session)? {
        FlowState::Submitted => println!(
            "Logged {} at {}",
            session.form.role.trim(),
            session.form.company.trim()
        ),
        state => log::info!("form closed in state {state:?}"),
    }
    Ok(())
}

fn sync(notifier: &Notifier) -> Result<()> {
    let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
    let store = NotionClient::from_config(&cfg)?;
    let clipboard = SystemClipboard;
    let launcher = SystemLauncher;

    let flow = SyncFlow::new(
        ShortcutRunner::new(&clipboard, &launcher),
        &store,
        notifier,
        &StdinConfirm,
    );
    // the flow reports its own failures
    let outcome = flow.run();
    log::debug!("sync finished: {outcome:?}");
    Ok(())
}

fn classify(files: &[PathBuf]) -> Result<()> {
    for path in files {
        let parsed = parse_email(read_eml(path)?);
        let status = parsed
            .detected_status
            .map_or("-".to_string(), |s| s.to_string());
        let company = parsed.company_name.as_deref().unwrap_or("-");
        println!(
            "{}\t{status}\t{company}\t{:.1}\t{}",
            path.display(),
            parsed.confidence,
            parsed.email.subject
        );
    }
    Ok(())
}
