//! Screen features. Each owns its state, reducer, and view.

pub mod groups;
pub mod login;
pub mod reminders;
