//! Login view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{LoginField, LoginState};
use crate::overlays::render_utils::{calculate_overlay_area, render_overlay_container};

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 12;

pub fn render(login: &LoginState, spinner: &str, frame: &mut Frame, area: Rect) {
    let popup = calculate_overlay_area(area, FORM_WIDTH, FORM_HEIGHT);
    render_overlay_container(frame, popup, login.mode.title(), Color::Cyan);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(form_lines(login, spinner)), inner);
}

fn form_lines(login: &LoginState, spinner: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let focused = |field| !login.submitting && login.focus == field;

    let mut username = vec![Span::styled("Username  ", label)];
    username.extend(login.username.spans(focused(LoginField::Username), value));
    let mut password = vec![Span::styled("Password  ", label)];
    password.extend(login.password.spans(focused(LoginField::Password), value));

    let status = if login.submitting {
        Line::from(Span::styled(
            format!("{spinner} Please wait…"),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &login.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::default()
    };

    let switch_hint = match login.mode {
        super::AuthMode::Login => "Ctrl+R: create an account instead",
        super::AuthMode::Register => "Ctrl+R: sign in to an existing account",
    };

    vec![
        Line::from(Span::styled(
            "RemindMe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(username),
        Line::default(),
        Line::from(password),
        Line::default(),
        status,
        Line::default(),
        Line::from(Span::styled("Enter: submit   Tab: next field", label)),
        Line::from(Span::styled(switch_hint, label)),
    ]
}
