//! Line classification for the flat viminfo record types.
//!
//! Each record kind is recognised by an anchored prefix and split on commas
//! with a maximum field count, so the trailing free-text field (command,
//! pattern, register content, filename) may itself contain commas.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::models::{ClassifiedRecord, RecordKind, RegisterType};

static COMMAND_HISTORY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|2,0,").unwrap());
static SEARCH_HISTORY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|2,1,").unwrap());
static REGISTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|3,").unwrap());
static FILEMARK_JUMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|4,").unwrap());

const COMMAND_FIELDS: usize = 5;
const SEARCH_FIELDS: usize = 5;
const REGISTER_FIELDS: usize = 8;
const MARK_JUMP_FIELDS: usize = 6;

/// Determine which flat record shape a line carries, if any
pub fn record_kind(line: &str) -> Option<RecordKind> {
    if COMMAND_HISTORY.is_match(line) {
        Some(RecordKind::Command)
    } else if SEARCH_HISTORY.is_match(line) {
        Some(RecordKind::Search)
    } else if REGISTER.is_match(line) {
        Some(RecordKind::Register)
    } else if FILEMARK_JUMP.is_match(line) {
        Some(RecordKind::MarkJump)
    } else {
        None
    }
}

/// Classify a raw line and extract its fields.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Returns
///
/// `Ok(None)` for lines that match no record prefix.
///
/// # Errors
///
/// Returns [`ParseError::MalformedRecord`] when a prefix matches but the line
/// has too few fields, and [`ParseError::InvalidNumber`] when a numeric field
/// (timestamp, mark state, visual-block size) does not parse.
pub fn classify_line(line: &str, line_number: usize) -> Result<Option<ClassifiedRecord>> {
    let Some(kind) = record_kind(line) else {
        return Ok(None);
    };

    let record = match kind {
        RecordKind::Command => {
            let fields = split_fields(line, kind, COMMAND_FIELDS, line_number)?;
            ClassifiedRecord::Command {
                epochtime: parse_number(fields[2], kind, "timestamp", line_number)?,
                command: fields[4].to_string(),
            }
        }
        RecordKind::Search => {
            let fields = split_fields(line, kind, SEARCH_FIELDS, line_number)?;
            ClassifiedRecord::Search {
                epochtime: parse_number(fields[2], kind, "timestamp", line_number)?,
                direction: fields[3].to_string(),
                pattern: fields[4].to_string(),
            }
        }
        RecordKind::Register => {
            let fields = split_fields(line, kind, REGISTER_FIELDS, line_number)?;
            let reg_type = match fields[3] {
                "1" => RegisterType::Line,
                "2" => RegisterType::VisualBlock {
                    lines: parse_number(fields[4], kind, "line count", line_number)?,
                    chars: parse_number(fields[5], kind, "char count", line_number)?,
                },
                _ => RegisterType::Char,
            };
            ClassifiedRecord::Register {
                epochtime: parse_number(fields[6], kind, "timestamp", line_number)?,
                name: fields[2].to_string(),
                reg_type,
                lines: fields[4].to_string(),
                content: fields[7].to_string(),
            }
        }
        RecordKind::MarkJump => {
            let fields = split_fields(line, kind, MARK_JUMP_FIELDS, line_number)?;
            ClassifiedRecord::MarkJump {
                epochtime: parse_number(fields[4], kind, "timestamp", line_number)?,
                state: parse_number(fields[1], kind, "state", line_number)?,
                line: fields[2].to_string(),
                chars: fields[3].to_string(),
                filename: fields[5].to_string(),
            }
        }
    };

    Ok(Some(record))
}

/// Split on commas into exactly `expected` fields, the last one keeping any
/// remaining commas
fn split_fields(
    line: &str,
    kind: RecordKind,
    expected: usize,
    line_number: usize,
) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.splitn(expected, ',').collect();
    if fields.len() != expected {
        return Err(ParseError::MalformedRecord {
            kind,
            line_number,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_number(
    value: &str,
    kind: RecordKind,
    field: &'static str,
    line_number: usize,
) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        kind,
        field,
        line_number,
        value: value.to_string(),
    })
}
