//! Interpretation of per-file edit history segments.
//!
//! A segment looks like:
//!
//! ```text
//! > ~/notes.txt
//! 	*	1656161664	0
//! 	"	3	9
//! 	^	3	10
//! 	.	3	9
//! 	+	2	0
//! 	+	3	9
//! ```
//!
//! `*` carries the timestamp for the entries that follow it. `"`, `^` and `.`
//! are the exit, last-insert and last-change positions. `+` entries list the
//! change positions, oldest first; only the final one is treated as a confirmed
//! edit of the session.

use tracing::debug;

use crate::models::{EditEntry, Event, FileSegment, TaggedEntry};
use crate::parsers::segmenter::is_file_header;

/// Segments with fewer entries than this record a visit without changes
const UNCHANGED_ENTRY_COUNT: usize = 5;

const SUFFIX_NOT_CHANGED: &str = " - File not changed.";
const SUFFIX_PASTE_OR_DELETE: &str = " - File could have been changed with paste/delete";
const SUFFIX_EDITED: &str = " - File has been edited";
const SUFFIX_MAYBE_OLDER: &str = " - File has been edited, may be older edits";

/// Decompose one segment line.
///
/// `> <path>` lines (space or tab after the marker) and any other line
/// holding a space are filename headers; everything else must split into
/// exactly four tab-separated fields. Returns `None` for anything else.
pub fn parse_edit_entry(line: &str) -> Option<EditEntry> {
    let header = if is_file_header(line) {
        line.split_once(char::is_whitespace)
    } else {
        line.split_once(' ')
    };
    if let Some((_, filename)) = header {
        return Some(EditEntry::Header { filename: filename.to_string() });
    }

    let fields: Vec<&str> = line.splitn(4, '\t').collect();
    match fields.as_slice() {
        [_, tag, line, chars] => Some(EditEntry::Tagged(TaggedEntry {
            tag: tag.to_string(),
            line: line.to_string(),
            chars: chars.to_string(),
        })),
        _ => None,
    }
}

/// Base suffix for a segment with `entry_count` lines
fn segment_suffix(entry_count: usize) -> &'static str {
    if entry_count < UNCHANGED_ENTRY_COUNT {
        SUFFIX_NOT_CHANGED
    } else if entry_count == UNCHANGED_ENTRY_COUNT {
        SUFFIX_PASTE_OR_DELETE
    } else {
        ""
    }
}

/// Interpret one file segment into timeline events, in entry order
///
/// The suffix is running state: a `+` entry replaces it, and in segments of
/// more than five entries the replacement carries over to the entries after it.
pub fn segment_events(segment: &FileSegment) -> Vec<Event> {
    let entry_count = segment.len();
    let mut suffix = segment_suffix(entry_count);
    let mut epochtime: Option<i64> = None;
    let mut filename = String::new();
    let mut events = Vec::new();

    for (index, line) in segment.lines.iter().enumerate() {
        if entry_count <= UNCHANGED_ENTRY_COUNT {
            suffix = segment_suffix(entry_count);
        }

        let entry = match parse_edit_entry(line) {
            Some(EditEntry::Header { filename: name }) => {
                filename = name;
                continue;
            }
            Some(EditEntry::Tagged(entry)) => entry,
            None => {
                debug!(line = %line, "skipping unrecognised edit history entry");
                continue;
            }
        };

        let message = match entry.tag.as_str() {
            "*" => {
                match entry.line.trim().parse::<i64>() {
                    Ok(time) => epochtime = Some(time),
                    Err(_) => debug!(value = %entry.line, "skipping edit timestamp that is not an integer"),
                }
                None
            }
            "\"" => Some(format!(
                ".viminfo - 7999 - Cursor position on Line: {}, char pos: {} when exiting file: {}{}",
                entry.line, entry.chars, filename, suffix
            )),
            "^" => Some(format!(
                ".viminfo - 7995 - Last \"Insert\"-mode cursor position on line: {}, char pos: {} in file: {}{}",
                entry.line, entry.chars, filename, suffix
            )),
            "." => Some(format!(
                ".viminfo - 7990 - Last change occurred on line: {}, char pos: {} in file: {}{}",
                entry.line, entry.chars, filename, suffix
            )),
            "+" => {
                suffix = if index == entry_count - 1 { SUFFIX_EDITED } else { SUFFIX_MAYBE_OLDER };
                Some(format!(
                    ".viminfo - 7{:03} - Change cursor position on line: {}, char pos: {} in file: {}{}",
                    index, entry.line, entry.chars, filename, suffix
                ))
            }
            _ => None,
        };

        if let (Some(time), Some(message)) = (epochtime, message) {
            events.push(Event::new(time, message));
        }
    }

    events
}

/// Interpret every segment, preserving segment order
pub fn edit_events(segments: &[FileSegment]) -> Vec<Event> {
    segments.iter().flat_map(segment_events).collect()
}
