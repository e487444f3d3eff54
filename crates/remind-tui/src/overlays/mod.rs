//! Modal dialogs.
//!
//! Overlays take over keyboard input while open. They only collect and
//! validate input; what a submission does to screen state is decided by the
//! owning feature through [`Submit`].

mod confirm;
mod group_form;
mod reminder_form;
pub mod render_utils;

pub use confirm::ConfirmState;
use crossterm::event::KeyEvent;
pub use group_form::GroupFormState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use reminder_form::{ReminderField, ReminderFormState};
use remind_core::models::{GroupId, NewGroup, NewReminder, ReminderId};

/// A validated request coming out of an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    CreateGroup(NewGroup),
    CreateReminder {
        group_id: GroupId,
        reminder: NewReminder,
    },
    DeleteGroup(GroupId),
    DeleteReminder {
        group_id: GroupId,
        id: ReminderId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub submit: Option<Submit>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            submit: None,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            submit: None,
        }
    }

    #[must_use]
    pub fn with_submit(mut self, submit: Submit) -> Self {
        self.submit = Some(submit);
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Confirm(ConfirmState),
    GroupForm(GroupFormState),
    ReminderForm(ReminderFormState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Confirm(c) => c.render(frame, area),
            Overlay::GroupForm(f) => f.render(frame, area),
            Overlay::ReminderForm(f) => f.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Confirm(c) => c.handle_key(key),
            Overlay::GroupForm(f) => f.handle_key(key),
            Overlay::ReminderForm(f) => f.handle_key(key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self {
            Overlay::Confirm(_) => {}
            Overlay::GroupForm(f) => f.name.insert_str(text),
            Overlay::ReminderForm(f) => f.focused_field_mut().insert_str(text),
        }
    }
}
