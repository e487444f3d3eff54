//! Create-group dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use remind_core::models::NewGroup;

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayUpdate, Submit};
use crate::common::TextField;

#[derive(Debug, Clone, Default)]
pub struct GroupFormState {
    pub name: TextField,
    pub error: Option<String>,
    /// Waiting for the server; closes on success.
    pub submitting: bool,
}

impl GroupFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            _ if self.submitting => OverlayUpdate::stay(),
            KeyCode::Enter => {
                if self.name.is_blank() {
                    self.error = Some("Group name is required".to_string());
                    return OverlayUpdate::stay();
                }
                self.submitting = true;
                self.error = None;
                OverlayUpdate::stay().with_submit(Submit::CreateGroup(NewGroup {
                    name: self.name.trimmed().to_string(),
                }))
            }
            _ => {
                if self.name.handle_key(key) {
                    self.error = None;
                }
                OverlayUpdate::stay()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("Enter", "create"), InputHint::new("Esc", "cancel")];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "New group",
                border_color: Color::Blue,
                width: 50,
                height: 7,
                hints: &hints,
            },
        );

        let mut name = vec![Span::styled("Name  ", Style::default().fg(Color::DarkGray))];
        name.extend(self.name.spans(!self.submitting, Style::default()));

        let status = if self.submitting {
            Line::from(Span::styled("Creating…", Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &self.error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            Line::default()
        };

        frame.render_widget(Paragraph::new(vec![Line::from(name), Line::default(), status]), body);
    }
}
