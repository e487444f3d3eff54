//! Create-reminder dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use remind_core::models::{GroupId, NewReminder, parse_due_date};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayUpdate, Submit};
use crate::common::TextField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderField {
    #[default]
    Title,
    Description,
    DueDate,
}

impl ReminderField {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::DueDate,
            Self::DueDate => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::DueDate,
            Self::Description => Self::Title,
            Self::DueDate => Self::Description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderFormState {
    pub group_id: GroupId,
    pub title: TextField,
    pub description: TextField,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`, local time. Optional.
    pub due_date: TextField,
    pub focus: ReminderField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ReminderFormState {
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            title: TextField::new(),
            description: TextField::new(),
            due_date: TextField::new(),
            focus: ReminderField::Title,
            error: None,
            submitting: false,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            ReminderField::Title => &mut self.title,
            ReminderField::Description => &mut self.description,
            ReminderField::DueDate => &mut self.due_date,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            _ if self.submitting => OverlayUpdate::stay(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.validate() {
                Ok(reminder) => {
                    self.submitting = true;
                    self.error = None;
                    OverlayUpdate::stay().with_submit(Submit::CreateReminder {
                        group_id: self.group_id,
                        reminder,
                    })
                }
                Err(message) => {
                    self.error = Some(message.to_string());
                    OverlayUpdate::stay()
                }
            },
            _ => {
                if self.focused_field_mut().handle_key(key) {
                    self.error = None;
                }
                OverlayUpdate::stay()
            }
        }
    }

    fn validate(&self) -> Result<NewReminder, &'static str> {
        if self.title.is_blank() {
            return Err("Title is required");
        }

        let due_date = if self.due_date.is_blank() {
            None
        } else {
            Some(
                parse_due_date(self.due_date.value())
                    .ok_or("Due date must be YYYY-MM-DD or YYYY-MM-DD HH:MM")?,
            )
        };

        Ok(NewReminder {
            title: self.title.trimmed().to_string(),
            description: self.description.trimmed().to_string(),
            due_date,
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("Enter", "create"),
            InputHint::new("Tab", "next field"),
            InputHint::new("Esc", "cancel"),
        ];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "New reminder",
                border_color: Color::Magenta,
                width: 64,
                height: 11,
                hints: &hints,
            },
        );

        let label = Style::default().fg(Color::DarkGray);
        let field_line = |name: &'static str, field: &TextField, which: ReminderField| {
            let mut spans = vec![Span::styled(name, label)];
            spans.extend(field.spans(!self.submitting && self.focus == which, Style::default()));
            Line::from(spans)
        };

        let status = if self.submitting {
            Line::from(Span::styled("Creating…", Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &self.error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            Line::default()
        };

        let lines = vec![
            field_line("Title        ", &self.title, ReminderField::Title),
            Line::default(),
            field_line("Description  ", &self.description, ReminderField::Description),
            Line::default(),
            field_line("Due date     ", &self.due_date, ReminderField::DueDate),
            Line::from(Span::styled("             YYYY-MM-DD [HH:MM], optional", label)),
            Line::default(),
            status,
        ];
        frame.render_widget(Paragraph::new(lines), body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_title_required() {
        let mut form = ReminderFormState::new(GroupId(3));
        let update = form.handle_key(key(KeyCode::Enter));
        assert!(update.submit.is_none());
        assert_eq!(form.error.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_invalid_due_date_rejected() {
        let mut form = ReminderFormState::new(GroupId(3));
        form.title.insert_str("Trash");
        form.due_date.insert_str("next tuesday");
        let update = form.handle_key(key(KeyCode::Enter));
        assert!(update.submit.is_none());
        assert!(form.error.is_some());
        assert!(!form.submitting);
    }

    #[test]
    fn test_submit_without_due_date() {
        let mut form = ReminderFormState::new(GroupId(3));
        form.title.insert_str("Trash");
        form.handle_key(key(KeyCode::Tab));
        form.focused_field_mut().insert_str("bins out");

        let update = form.handle_key(key(KeyCode::Enter));

        assert_eq!(
            update.submit,
            Some(Submit::CreateReminder {
                group_id: GroupId(3),
                reminder: NewReminder {
                    title: "Trash".into(),
                    description: "bins out".into(),
                    due_date: None,
                },
            })
        );
        assert!(form.submitting);
    }

    #[test]
    fn test_submit_with_due_date() {
        let mut form = ReminderFormState::new(GroupId(3));
        form.title.insert_str("Trash");
        form.due_date.insert_str("2026-10-15 08:00");

        let update = form.handle_key(key(KeyCode::Enter));

        let Some(Submit::CreateReminder { reminder, .. }) = update.submit else {
            panic!("expected a create submission");
        };
        assert_eq!(reminder.due_date, parse_due_date("2026-10-15 08:00"));
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ReminderFormState::new(GroupId(3));
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, ReminderField::DueDate);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, ReminderField::Title);
    }
}
