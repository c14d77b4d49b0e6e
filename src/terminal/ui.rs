use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::intake::{FlowState, IntakeSession};
use crate::notifier::Level;
use crate::terminal::state::{Field, FormState, display_value};

pub fn render(f: &mut Frame, session: &IntakeSession, view: &FormState) {
    let [main, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .areas(f.area());

    let block = Block::default()
        .title(" Log Job Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(main);
    f.render_widget(block, main);

    if matches!(session.state, FlowState::Idle | FlowState::Loading) {
        f.render_widget(
            Paragraph::new("Loading posting from the browser..."),
            inner,
        );
        return;
    }

    let mut rows: Vec<Constraint> = Field::ORDER.iter().map(|_| Constraint::Length(3)).collect();
    rows.push(Constraint::Length(2)); // url
    rows.push(Constraint::Min(1)); // status
    let areas = Layout::vertical(rows).split(inner);

    for (i, field) in Field::ORDER.iter().copied().enumerate() {
        render_field(f, session, view, field, areas[i]);
    }

    let url = Paragraph::new(Line::from(vec![
        Span::styled("URL ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(session.form.url.clone(), Style::default().fg(Color::Gray)),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(url, areas[Field::ORDER.len()]);

    if let Some((level, line)) = &session.status {
        let color = match level {
            Level::Progress => Color::Cyan,
            Level::Success => Color::Green,
            Level::Failure => Color::Red,
        };
        let status = Paragraph::new(line.clone())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        f.render_widget(status, areas[Field::ORDER.len() + 1]);
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" next  "),
        Span::styled("←/→", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" choose  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" log  "),
        Span::styled("Ctrl-R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" refresh  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" cancel"),
    ]));
    f.render_widget(hint, footer);
}

fn render_field(f: &mut Frame, session: &IntakeSession, view: &FormState, field: Field, area: Rect) {
    let focused = view.focus == field;
    let border = if focused { Color::Yellow } else { Color::DarkGray };

    let title = if field == Field::Resume {
        format!(" {} ({}) ", field.label(), session.resume_folder().display())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let value = display_value(&session.form, field, session.prefs.auto_refresh);
    let cursor = cursor_position(area, &value);
    f.render_widget(Paragraph::new(value).block(block), area);

    if focused && field.is_text() {
        f.set_cursor_position(cursor);
    }
}

/// End of `value` inside a bordered box, clamped to the last inner column.
fn cursor_position(area: Rect, value: &str) -> Position {
    let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}
