/// Edge case integration tests
///
/// These tests cover line-ending quirks, unusual record content and gaps in the
/// edit history that must not break reconstruction
mod common;

use std::fs;

use common::{EditSegmentBuilder, ViminfoBuilder, columns};
use viminfo_timeline::models::RecordKind;
use viminfo_timeline::output::BODY_COLUMNS;
use viminfo_timeline::{ParseError, build_timeline, read_viminfo, render_row};

fn timeline_for(content: &str) -> viminfo_timeline::Timeline {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(".viminfo");
    fs::write(&path, content).unwrap();
    let lines = read_viminfo(&path).unwrap();
    build_timeline(&lines).unwrap()
}

#[test]
fn test_edge_case_crlf_line_endings() {
    let timeline = timeline_for(
        "|2,0,1655640853,,\"wq\"\r\n\r\n> a.txt\r\n\t*\t100\t0\r\n\t.\t1\t1\r\n\r\n> b.txt\r\n\t*\t200\t0\r\n\t\"\t2\t2\r\n",
    );
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.stats.segments, 2);
    assert_eq!(timeline.events[0].message, ".viminfo - 8000 - Last time for command: \"wq\"");
    assert!(timeline.events[2].message.contains("when exiting file: b.txt"));
}

#[test]
fn test_edge_case_whitespace_only_line_separates_segments() {
    let timeline = timeline_for("> a.txt\n\t*\t100\t0\n   \t\n> b.txt\n\t*\t200\t0\n\t.\t3\t3\n");
    assert_eq!(timeline.stats.segments, 2);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.events[0].epochtime, 200);
}

#[test]
fn test_edge_case_no_trailing_newline() {
    let timeline = timeline_for("> a.txt\n\t*\t100\t0\n\t^\t3\t3");
    assert_eq!(timeline.len(), 1);
    assert!(timeline.events[0].message.starts_with(".viminfo - 7995 - "));
}

#[test]
fn test_edge_case_filename_with_spaces() {
    let timeline = timeline_for("> ~/My Documents/notes file.txt\n\t*\t100\t0\n\t.\t1\t1\n");
    assert!(timeline.events[0].message.contains("in file: ~/My Documents/notes file.txt"));
}

#[test]
fn test_edge_case_register_content_with_commas_and_pipes() {
    let (_dir, path) = ViminfoBuilder::new()
        .with_register("1", 1, 2, 0, 1655566954, "a,b|c,\"d\"")
        .build();
    let lines = read_viminfo(&path).unwrap();
    let timeline = build_timeline(&lines).unwrap();

    assert_eq!(timeline.len(), 1);
    assert!(timeline.events[0].message.ends_with(r#"Content: "a,b|c,"d"""#));
    let row = render_row(&timeline.events[0]);
    assert_eq!(columns(&row).len(), BODY_COLUMNS);
    assert!(row.contains(r#"Content: "a,b:c,"d"""#));
}

#[test]
fn test_edge_case_unicode_content() {
    let (_dir, path) = ViminfoBuilder::new()
        .with_search(1656165977, 47, "café 字")
        .with_edit_segment(EditSegmentBuilder::new("~/ファイル.txt").timestamp(5).tag('.', 1, 1))
        .build();
    let lines = read_viminfo(&path).unwrap();
    let timeline = build_timeline(&lines).unwrap();

    assert!(timeline.events[0].message.contains("\"café 字\""));
    assert!(timeline.events[1].message.contains("~/ファイル.txt"));
}

#[test]
fn test_edge_case_segment_without_timestamp() {
    let (_dir, path) = ViminfoBuilder::new()
        .with_edit_segment(EditSegmentBuilder::new("a.txt").tag('"', 1, 0).tag('.', 1, 0))
        .with_edit_segment(EditSegmentBuilder::new("b.txt").timestamp(9).tag('"', 4, 4))
        .build();
    let lines = read_viminfo(&path).unwrap();
    let timeline = build_timeline(&lines).unwrap();

    assert_eq!(timeline.stats.segments, 2);
    assert_eq!(timeline.len(), 1);
    assert!(timeline.events[0].message.contains("b.txt"));
}

#[test]
fn test_edge_case_malformed_edit_entries_are_skipped() {
    let timeline =
        timeline_for("> a.txt\n\t*\t100\t0\n\t+\t1\n\tjunk\n\t+\t2\t2\t\textra\n\t.\t5\t5\n");
    let messages: Vec<&str> = timeline.events.iter().map(|e| e.message.as_str()).collect();
    // splitn(4) keeps the surplus tabs inside the char field
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("char pos: 2\t\textra"));
    assert!(messages[1].starts_with(".viminfo - 7990 - "));
}

#[test]
fn test_edge_case_malformed_flat_record_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(".viminfo");
    fs::write(&path, "|2,1,1656165977\n").unwrap();
    let lines = read_viminfo(&path).unwrap();

    let err = build_timeline(&lines).unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedRecord {
            kind: RecordKind::Search,
            line_number: 1,
            expected: 5,
            found: 3,
        }
    );
}

#[test]
fn test_edge_case_header_shaped_line_without_edit_entries() {
    let timeline = timeline_for("|2,0,1,,\"q\"\n> lonely.txt\n");
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.stats.segments, 1);
}
