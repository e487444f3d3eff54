//! Groups screen: the list of reminder groups.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::GroupsState;
pub use update::{confirm_delete, handle_event, handle_key, submit_create};
