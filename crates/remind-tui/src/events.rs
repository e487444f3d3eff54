//! UI events consumed by the reducer.
//!
//! Terminal input and timer ticks come from the runtime's event loop; API
//! results come back through the inbox from spawned effect handlers.

use crossterm::event::Event;
use remind_core::models::{Group, GroupId, Reminder, ReminderId, Session};
use remind_core::{ApiResult, AuthFailure};

use crate::login::AuthMode;

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick; drives the spinner and toast expiry.
    Tick,
    Terminal(Event),

    /// Result of a login or registration request.
    AuthCompleted {
        mode: AuthMode,
        result: ApiResult<Session>,
    },
    Groups(GroupsUiEvent),
    Reminders(RemindersUiEvent),

    /// The server rejected our token. The session store is already cleared.
    SessionExpired(AuthFailure),
}

#[derive(Debug)]
pub enum GroupsUiEvent {
    Loaded(ApiResult<Vec<Group>>),
    Created(ApiResult<Group>),
    Deleted {
        id: GroupId,
        result: ApiResult<()>,
    },
}

/// Reminder results carry the group they were issued for, so results for a
/// group that is no longer on screen can be dropped.
#[derive(Debug)]
pub enum RemindersUiEvent {
    Loaded {
        group_id: GroupId,
        result: ApiResult<(Group, Vec<Reminder>)>,
    },
    Created {
        group_id: GroupId,
        result: ApiResult<Reminder>,
    },
    Toggled {
        group_id: GroupId,
        id: ReminderId,
        /// The flag that was sent.
        completed: bool,
        result: ApiResult<Reminder>,
    },
    Deleted {
        group_id: GroupId,
        id: ReminderId,
        result: ApiResult<()>,
    },
}
