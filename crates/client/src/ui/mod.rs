//! Terminal frontend: input parsing and board/status rendering.

mod command;
mod render;

pub use command::{parse_command, UiCommand, HELP_TEXT};
pub use render::{connecting_dots, render_status, render_view};
