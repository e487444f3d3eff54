//! Reminders screen: one group's reminders.

mod render;
mod state;
mod update;

pub use render::{reminder_line, render};
pub use state::RemindersState;
pub use update::{confirm_delete, handle_event, handle_key, submit_create};
