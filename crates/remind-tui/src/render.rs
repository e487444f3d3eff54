//! Pure view functions for the TUI.
//!
//! Takes `&AppState`, draws to a ratatui `Frame`, never mutates.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::overlays::render_utils::{InputHint, hint_spans};
use crate::state::{AppState, Screen, Toast, ToastKind};
use crate::{groups, login, reminders};

/// Spinner frames for loading indicators.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const TOAST_WIDTH: u16 = 48;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);

    let spinner = spinner(app.spinner_frame);
    match app.screen {
        Screen::Login => login::render(&app.login, spinner, frame, chunks[1]),
        Screen::Groups => groups::render(&app.groups, spinner, frame, chunks[1]),
        Screen::Reminders { .. } => reminders::render(&app.reminders, spinner, frame, chunks[1]),
    }

    render_footer(app, frame, chunks[2]);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
    if let Some(toast) = &app.toast {
        render_toast(toast, frame, area);
    }
}

fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " RemindMe",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let Screen::Reminders { .. } = app.screen
        && let Some(group) = &app.reminders.group
    {
        spans.push(Span::styled(
            format!("  › {}", group.name),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(user) = &app.user {
        spans.push(Span::styled(
            format!("  signed in as {}", user.username),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = footer_hints(app);
    let mut spans = vec![Span::raw(" ")];
    spans.extend(hint_spans(hints, Color::Cyan));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn footer_hints(app: &AppState) -> &'static [InputHint<'static>] {
    const LOGIN: &[InputHint<'static>] = &[
        InputHint::new("Enter", "submit"),
        InputHint::new("Tab", "switch field"),
        InputHint::new("Ctrl+R", "login/register"),
        InputHint::new("Ctrl+C", "quit"),
    ];
    const GROUPS: &[InputHint<'static>] = &[
        InputHint::new("↑↓", "select"),
        InputHint::new("Enter", "open"),
        InputHint::new("n", "new"),
        InputHint::new("d", "delete"),
        InputHint::new("r", "refresh"),
        InputHint::new("L", "logout"),
        InputHint::new("q", "quit"),
    ];
    const REMINDERS: &[InputHint<'static>] = &[
        InputHint::new("↑↓", "select"),
        InputHint::new("Space", "toggle"),
        InputHint::new("n", "new"),
        InputHint::new("d", "delete"),
        InputHint::new("Esc", "back"),
        InputHint::new("L", "logout"),
        InputHint::new("q", "quit"),
    ];

    if app.overlay.is_some() {
        return &[];
    }
    match app.screen {
        Screen::Login => LOGIN,
        Screen::Groups => GROUPS,
        Screen::Reminders { .. } => REMINDERS,
    }
}

/// Top-right corner box.
fn render_toast(toast: &Toast, frame: &mut Frame, area: Rect) {
    let (title, color) = match toast.kind {
        ToastKind::Success => ("Success", Color::Green),
        ToastKind::Error => ("Error", Color::Red),
        ToastKind::Info => ("Info", Color::Blue),
    };

    let width = TOAST_WIDTH.min(area.width);
    let inner_width = usize::from(width.saturating_sub(2)).max(1);
    let text_lines = toast.message.chars().count().div_ceil(inner_width).max(1);
    let height = u16::try_from(text_lines + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + HEADER_HEIGHT,
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "));
    frame.render_widget(
        Paragraph::new(toast.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use remind_core::models::{User, UserId};

    use super::*;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), "◐");
        assert_eq!(spinner(5), "◓");
    }

    #[test]
    fn test_login_screen_renders() {
        let app = AppState::new(None, Duration::from_secs(4));
        let screen = draw(&app);
        assert!(screen.contains("Sign in"));
        assert!(screen.contains("Username"));
    }

    #[test]
    fn test_empty_groups_and_toast_render() {
        let user = User {
            id: UserId(1),
            username: "alice".into(),
        };
        let mut app = AppState::new(Some(user), Duration::from_secs(4));
        app.toast_success("Group created");
        let screen = draw(&app);
        assert!(screen.contains("signed in as alice"));
        assert!(screen.contains("No groups yet"));
        assert!(screen.contains("Group created"));
    }
}
