use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::intake::IntakeForm;
use crate::terminal::state::{Field, FormState, cycle_resume, cycle_source, text_mut};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    Refresh,
    ToggleAutoRefresh,
    Cancel,
}

pub fn handle_key(key: KeyEvent, view: &mut FormState, form: &mut IntakeForm) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('s') => Action::Submit,
            KeyCode::Char('c') => Action::Cancel,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => return Action::Cancel,
        KeyCode::Enter => return Action::Submit,
        KeyCode::Tab | KeyCode::Down => {
            view.focus_next();
            return Action::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            view.focus_prev();
            return Action::None;
        }
        _ => {}
    }

    match view.focus {
        Field::Source => handle_selector(key, |d| cycle_source(form, d)),
        Field::Resume => handle_selector(key, |d| cycle_resume(form, d)),
        Field::AutoRefresh => match key.code {
            KeyCode::Char(' ') => Action::ToggleAutoRefresh,
            _ => Action::None,
        },
        field => {
            if let Some(text) = text_mut(form, field) {
                edit_text(key, text);
            }
            Action::None
        }
    }
}

fn handle_selector(key: KeyEvent, mut cycle: impl FnMut(isize)) -> Action {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => cycle(1),
        KeyCode::Left => cycle(-1),
        _ => {}
    }
    Action::None
}

fn edit_text(key: KeyEvent, text: &mut String) {
    match key.code {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Backspace => {
            text.pop();
        }
        KeyCode::Delete => text.clear(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut view = FormState::default();
        let mut form = IntakeForm {
            company: "Acm".into(),
            ..Default::default()
        };
        handle_key(press(KeyCode::Char('e')), &mut view, &mut form);
        assert_eq!(form.company, "Acme");
        handle_key(press(KeyCode::Backspace), &mut view, &mut form);
        handle_key(press(KeyCode::Backspace), &mut view, &mut form);
        assert_eq!(form.company, "Ac");

        handle_key(press(KeyCode::Tab), &mut view, &mut form);
        handle_key(press(KeyCode::Char('x')), &mut view, &mut form);
        assert_eq!(form.role, "x");
        assert_eq!(form.company, "Ac");
    }

    #[test]
    fn control_keys_map_to_actions() {
        let mut view = FormState::default();
        let mut form = IntakeForm::default();
        assert_eq!(handle_key(ctrl('r'), &mut view, &mut form), Action::Refresh);
        assert_eq!(handle_key(ctrl('s'), &mut view, &mut form), Action::Submit);
        assert_eq!(handle_key(press(KeyCode::Esc), &mut view, &mut form), Action::Cancel);
        // ctrl shortcuts never reach the text field
        assert_eq!(form.company, "");
    }

    #[test]
    fn space_toggles_checkbox_only_when_focused() {
        let mut view = FormState {
            focus: Field::AutoRefresh,
        };
        let mut form = IntakeForm::default();
        assert_eq!(
            handle_key(press(KeyCode::Char(' ')), &mut view, &mut form),
            Action::ToggleAutoRefresh
        );

        view.focus = Field::Company;
        assert_eq!(
            handle_key(press(KeyCode::Char(' ')), &mut view, &mut form),
            Action::None
        );
        assert_eq!(form.company, " ");
    }

    #[test]
    fn arrows_cycle_source_selector() {
        let mut view = FormState {
            focus: Field::Source,
        };
        let mut form = IntakeForm {
            url: "https://www.indeed.com/viewjob?jk=1".into(),
            source: "Indeed".into(),
            ..Default::default()
        };
        handle_key(press(KeyCode::Right), &mut view, &mut form);
        assert_eq!(form.source, "LinkedIn");
        handle_key(press(KeyCode::Left), &mut view, &mut form);
        assert_eq!(form.source, "Indeed");
    }
}
