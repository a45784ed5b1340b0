//! Body file rendering
//!
//! Each event becomes one pipe-delimited row of 12 columns:
//!
//! ```text
//! MD5|name|inode|mode|UID|GID|size|atime|mtime|ctime|crtime|flags
//! 0|<message>|0|N/A         |0|0|0|<t>|<t>|<t>|<t>|0
//! ```
//!
//! # Column Integrity
//!
//! Messages embed text taken straight from the viminfo file (commands, search
//! patterns, register content, filenames). Any delimiter inside a message is
//! replaced before rendering so every row always has exactly [`BODY_COLUMNS`]
//! columns.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::models::Event;

/// Column separator of the body format
pub const BODY_DELIMITER: char = '|';

/// Replacement for delimiters found inside messages
pub const DELIMITER_SUBSTITUTE: char = ':';

/// Number of columns in a body row
pub const BODY_COLUMNS: usize = 12;

/// Mode column placeholder, padded to a fixed width
const MODE_PLACEHOLDER: &str = "N/A         ";

/// Replace every body delimiter in a message
///
/// # Examples
///
/// ```
/// use viminfo_timeline::output::sanitize_message;
///
/// assert_eq!(sanitize_message("ls | wc -l"), "ls : wc -l");
/// assert_eq!(sanitize_message("plain"), "plain");
/// ```
pub fn sanitize_message(message: &str) -> Cow<'_, str> {
    if message.contains(BODY_DELIMITER) {
        Cow::Owned(message.replace(BODY_DELIMITER, &DELIMITER_SUBSTITUTE.to_string()))
    } else {
        Cow::Borrowed(message)
    }
}

/// Render one event as a body row, without the trailing newline
pub fn render_row(event: &Event) -> String {
    let t = event.epochtime;
    format!(
        "0{d}{msg}{d}0{d}{mode}{d}0{d}0{d}0{d}{t}{d}{t}{d}{t}{d}{t}{d}0",
        d = BODY_DELIMITER,
        msg = sanitize_message(&event.message),
        mode = MODE_PLACEHOLDER,
    )
}

/// Write every event as a body row, one per line, in the order given
pub fn write_events<W: Write>(writer: &mut W, events: &[Event]) -> io::Result<()> {
    for event in events {
        writeln!(writer, "{}", render_row(event))?;
    }
    writer.flush()
}
