//! Timeline output in the Sleuth Kit `mactime` body format

pub mod body;

pub use body::{BODY_COLUMNS, render_row, sanitize_message, write_events};
