//! Locate the "history of marks within files" block and split it per file.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::FileSegment;

static EDIT_FILE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s").unwrap());

/// Whether a line has the `> <path>` filename header shape
pub fn is_file_header(line: &str) -> bool {
    EDIT_FILE_HEADER.is_match(line)
}

/// Lines from the first filename header to end of input.
///
/// Returns an empty slice when no header exists.
pub fn edit_section(lines: &[String]) -> &[String] {
    match lines.iter().position(|line| is_file_header(line)) {
        Some(start) => &lines[start..],
        None => &[],
    }
}

/// Split the edit section into per-file segments on blank lines.
///
/// Every blank line closes the current segment, so consecutive blanks and a
/// trailing blank leave empty segments behind; those carry no entries and
/// produce no events.
pub fn split_segments(section: &[String]) -> Vec<FileSegment> {
    if section.is_empty() {
        return Vec::new();
    }

    let mut segments = vec![FileSegment::default()];
    for line in section {
        if line.is_empty() {
            segments.push(FileSegment::default());
        } else if let Some(current) = segments.last_mut() {
            current.lines.push(line.clone());
        }
    }
    segments
}

/// Find the edit section of a viminfo file and segment it
pub fn segment_edit_history(lines: &[String]) -> Vec<FileSegment> {
    split_segments(edit_section(lines))
}
