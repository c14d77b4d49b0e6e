pub mod events;
pub mod state;
pub mod ui;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};
use std::time::{Duration, Instant};

use crate::intake::{FlowState, IntakeSession};
use crate::terminal::events::{Action, handle_key};
use crate::terminal::state::FormState;

const TICK: Duration = Duration::from_millis(200);
const URL_POLL: Duration = Duration::from_secs(2);

/// Show the intake form until the application is logged or the form is
/// dismissed. Returns how it ended.
pub fn run_intake(session: &mut IntakeSession) -> Result<FlowState> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, session);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, session: &mut IntakeSession) -> Result<FlowState> {
    let mut view = FormState::default();

    terminal.draw(|f| ui::render(f, session, &view))?;
    session.open();

    let mut last_poll = Instant::now();
    while !session.state.is_finished() {
        terminal.draw(|f| ui::render(f, session, &view))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                match handle_key(key, &mut view, &mut session.form) {
                    Action::None => {}
                    Action::Cancel => session.cancel(),
                    Action::ToggleAutoRefresh => session.toggle_auto_refresh(),
                    Action::Refresh => {
                        session.state = FlowState::Loading;
                        terminal.draw(|f| ui::render(f, session, &view))?;
                        session.refresh();
                    }
                    Action::Submit => {
                        if session.state == FlowState::Ready {
                            session.submit();
                        }
                    }
                }
            }
        }

        // The browser moved on: this form describes a stale posting.
        if last_poll.elapsed() >= URL_POLL {
            last_poll = Instant::now();
            if session.state == FlowState::Ready && session.url_changed() {
                log::info!("active tab changed, closing form");
                session.cancel();
            }
        }
    }

    Ok(session.state)
}
