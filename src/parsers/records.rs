//! Message composition for flat history records.
//!
//! Every message embeds a four digit category code used by timeline tooling
//! to sort and filter: `8000` command, `5000` search, `3000`/`4000` register,
//! `1000`/`9000`/`0000` mark and jumplist entries.

use crate::models::{ClassifiedRecord, Event, RegisterType};

/// Search direction codes (the ASCII values of `/` and `?`)
const SEARCH_FORWARD: &str = "47";
const SEARCH_BACKWARD: &str = "63";

/// The small delete register `"-`
const DELETE_REGISTER: &str = "36";

/// Mark states from this value upward (`'0`..`'9`) are written on exit
const FILE_CLOSING_STATE: i64 = 48;

/// Convert a classified record into its timeline event
pub fn record_event(record: &ClassifiedRecord) -> Event {
    Event::new(record.epochtime(), record_message(record))
}

/// Compose the timeline message for a classified record
pub fn record_message(record: &ClassifiedRecord) -> String {
    match record {
        ClassifiedRecord::Command { command, .. } => {
            format!(".viminfo - 8000 - Last time for command: {}", command)
        }
        ClassifiedRecord::Search { direction, pattern, .. } => {
            format!(
                ".viminfo - 5000 - Last search for: {} by using: {}",
                pattern,
                search_direction(direction)
            )
        }
        ClassifiedRecord::Register { name, reg_type, lines, content, .. } => {
            if name == DELETE_REGISTER {
                return format!(".viminfo - 4000 - Register-name: -. Deleted text: {}", content);
            }
            let (type_name, size) = register_size(*reg_type, lines);
            format!(
                ".viminfo - 3000 - Register-name: {}. Contains type: {}. Size: {}. Content: {}",
                name, type_name, size, content
            )
        }
        ClassifiedRecord::MarkJump { state, line, chars, filename, .. } => {
            // Opening check runs last and wins over the closing check
            if line == "1" && chars == "0" {
                format!(".viminfo - 0000 - Indication of file opening: {}", filename)
            } else if *state >= FILE_CLOSING_STATE {
                format!(
                    ".viminfo - 9000 - Indication of file write/closing: {} with cursor at line: {} column: {}",
                    filename, line, chars
                )
            } else {
                format!(
                    ".viminfo - 1000 - Vim cursor position on line: {}, char position: {} in file: {}",
                    line, chars, filename
                )
            }
        }
    }
}

/// Human-readable name for a search direction code
pub fn search_direction(code: &str) -> &'static str {
    match code {
        SEARCH_FORWARD => "forward search (/)",
        SEARCH_BACKWARD => "backward search (?)",
        _ => "unknown search",
    }
}

/// Register type name and size description
fn register_size(reg_type: RegisterType, lines: &str) -> (&'static str, String) {
    match reg_type {
        RegisterType::Line => ("Line", format!("{} line(s)", lines)),
        RegisterType::VisualBlock { lines: line_count, chars } => {
            let line_word = if line_count == 1 { "line" } else { "lines" };
            let width = chars + 1;
            let char_word = if width == 1 { "char" } else { "chars" };
            ("Visual block", format!("{} {} * {} {}", lines, line_word, width, char_word))
        }
        RegisterType::Char => ("Char", format!("{} line(s)", lines)),
    }
}
