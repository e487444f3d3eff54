//! Helpers shared by features and overlays.

pub mod text;
mod text_field;

pub use text::truncate_with_ellipsis;
pub use text_field::TextField;
