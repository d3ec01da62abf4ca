pub mod display;
pub mod html;
pub mod terminal;

pub use display::{Panel, format_match_date, initials};
