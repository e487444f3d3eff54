use std::collections::BTreeSet;

use remind_core::models::{Group, Reminder, ReminderId};

#[derive(Debug, Clone, Default)]
pub struct RemindersState {
    pub group: Option<Group>,
    /// Newest first; new reminders are prepended.
    pub reminders: Vec<Reminder>,
    pub loading: bool,
    pub selected: usize,
    /// Reminders with a completion update in flight.
    pub toggling: BTreeSet<ReminderId>,
    pub deleting: Option<ReminderId>,
}

impl RemindersState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn selected_reminder(&self) -> Option<&Reminder> {
        self.reminders.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.reminders.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.reminders.len().saturating_sub(1));
    }
}
