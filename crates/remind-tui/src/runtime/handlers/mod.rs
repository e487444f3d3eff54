//! Effect handlers.
//!
//! Async handlers call the API and return the `UiEvent` carrying the result;
//! the dispatcher spawns them and forwards the event to the inbox. They never
//! touch `AppState`.

mod auth;
mod groups;
mod reminders;

pub use auth::*;
pub use groups::*;
pub use reminders::*;
