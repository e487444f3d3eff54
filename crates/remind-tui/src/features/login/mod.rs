//! Login / registration screen.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{AuthMode, LoginField, LoginState};
pub use update::{handle_auth_result, handle_key, handle_paste};
