//! Yes/no confirmation before a delete.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use remind_core::models::{Group, GroupId, Reminder};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayUpdate, Submit};

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    /// Sent when the user confirms.
    pub on_confirm: Submit,
}

impl ConfirmState {
    pub fn delete_group(group: &Group) -> Self {
        Self {
            title: format!("Delete \"{}\"", group.name),
            message: "Are you sure you want to delete this group? This will also delete all reminders in this group.".to_string(),
            on_confirm: Submit::DeleteGroup(group.id),
        }
    }

    pub fn delete_reminder(group_id: GroupId, reminder: &Reminder) -> Self {
        Self {
            title: format!("Delete \"{}\"", reminder.title),
            message: "Are you sure you want to delete this reminder?".to_string(),
            on_confirm: Submit::DeleteReminder {
                group_id,
                id: reminder.id,
            },
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                OverlayUpdate::close().with_submit(self.on_confirm.clone())
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("y", "delete"), InputHint::new("n/Esc", "cancel")];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &self.title,
                border_color: Color::Red,
                width: 56,
                height: 8,
                hints: &hints,
            },
        );

        let para = Paragraph::new(Line::from(Span::styled(
            self.message.clone(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(para, body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use remind_core::models::Creator;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn chores() -> Group {
        Group {
            id: GroupId(3),
            name: "Chores".into(),
            created_by: None,
            creator: Creator::default(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_confirm_submits_delete() {
        let confirm = ConfirmState::delete_group(&chores());
        let update = confirm.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(update.submit, Some(Submit::DeleteGroup(GroupId(3))));
    }

    #[test]
    fn test_cancel_submits_nothing() {
        let confirm = ConfirmState::delete_group(&chores());
        let update = confirm.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(update, OverlayUpdate::close());
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        let confirm = ConfirmState::delete_group(&chores());
        let update = confirm.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        assert_eq!(update, OverlayUpdate::stay());
    }
}
