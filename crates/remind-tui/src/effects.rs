//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O itself.

use remind_core::models::{Credentials, GroupId, NewGroup, NewReminder, ReminderId, Session};

use crate::login::AuthMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist a freshly issued session.
    StoreSession(Session),
    /// Drop the stored session (explicit logout).
    ClearSession,

    /// `POST /auth/login` or `POST /auth/register`.
    Authenticate {
        mode: AuthMode,
        credentials: Credentials,
    },

    LoadGroups,
    CreateGroup(NewGroup),
    DeleteGroup(GroupId),

    /// Fetch a group and its reminders together.
    LoadReminders(GroupId),
    CreateReminder {
        group_id: GroupId,
        reminder: NewReminder,
    },
    /// Send `completed` for a reminder (already inverted by the reducer).
    ToggleReminder {
        group_id: GroupId,
        id: ReminderId,
        completed: bool,
    },
    DeleteReminder {
        group_id: GroupId,
        id: ReminderId,
    },
}
