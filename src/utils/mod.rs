//! Shared utility functions.

mod formatting;
mod interaction;

pub use formatting::{date_formats, format_date_only, parse_date};
pub use interaction::confirm;
