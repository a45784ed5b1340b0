//! Timeline builder for viminfo files.
//!
//! # Error Handling Strategy
//!
//! - **Flat records**: the first record that fails to decompose aborts the build and
//!   its [`ParseError`] is returned. Nothing is rendered for a failed build, so a
//!   caller never sees a partial timeline.
//! - **Edit history**: unparseable entries are skipped by the interpreter.
//! - **Summary reporting**: record, segment and event counts are logged at info level
//!   once the build completes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::models::{ClassifiedRecord, Event, RecordKind};
use crate::parsers::{classify_line, edit_events, record_event, segment_edit_history};

/// Counters describing one timeline build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineStats {
    /// Flat records classified, by kind
    pub records: BTreeMap<RecordKind, usize>,
    /// Non-empty file segments in the edit history block
    pub segments: usize,
    /// Events produced by the edit history pass
    pub edit_events: usize,
}

impl TimelineStats {
    pub fn record_count(&self) -> usize {
        self.records.values().sum()
    }

    /// Flat records classified of one kind
    pub fn count(&self, kind: RecordKind) -> usize {
        self.records.get(&kind).copied().unwrap_or(0)
    }
}

/// Events in source-scan order plus build statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    pub events: Vec<Event>,
    pub stats: TimelineStats,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest and latest event time, if any event is representable as a date
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut times = self.events.iter().filter_map(Event::datetime);
        let first = times.next()?;
        Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

/// Classify every flat record, in line order
///
/// # Errors
///
/// Returns the first [`ParseError`](crate::error::ParseError) raised by the classifier.
pub fn classify_records(lines: &[String]) -> Result<Vec<ClassifiedRecord>> {
    let mut records = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(record) = classify_line(line, index + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Build the full timeline for a viminfo file's lines
///
/// Runs two passes over the input:
/// 1. Flat records (command, search, register, mark/jump) across all lines
/// 2. The per-file edit history block, from the first `> <file>` header onward
///
/// Events keep source-scan order: all flat-record events precede all edit
/// history events. Consumers wanting chronological order sort on the time
/// columns themselves.
///
/// # Errors
///
/// Returns an error when a flat record is malformed.
///
/// # Examples
///
/// ```
/// use viminfo_timeline::build_timeline;
///
/// let lines: Vec<String> = ["|2,0,1655640853,,\"wq\"", "> notes.txt", "\t*\t1655640900\t0", "\t.\t3\t1"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let timeline = build_timeline(&lines)?;
/// assert_eq!(timeline.len(), 2);
/// # Ok::<(), viminfo_timeline::error::ParseError>(())
/// ```
pub fn build_timeline(lines: &[String]) -> Result<Timeline> {
    let mut stats = TimelineStats::default();

    let records = classify_records(lines)?;
    for record in &records {
        *stats.records.entry(record.kind()).or_default() += 1;
    }
    let mut events: Vec<Event> = records.iter().map(record_event).collect();

    let segments = segment_edit_history(lines);
    stats.segments = segments.iter().filter(|s| !s.is_empty()).count();
    let edits = edit_events(&segments);
    stats.edit_events = edits.len();
    events.extend(edits);

    let timeline = Timeline { events, stats };
    log_summary(&timeline);
    Ok(timeline)
}

fn log_summary(timeline: &Timeline) {
    let stats = &timeline.stats;
    info!(
        commands = stats.count(RecordKind::Command),
        searches = stats.count(RecordKind::Search),
        registers = stats.count(RecordKind::Register),
        marks = stats.count(RecordKind::MarkJump),
        segments = stats.segments,
        events = timeline.len(),
        "built viminfo timeline"
    );
    if let Some((first, last)) = timeline.time_span() {
        info!(
            first = %first.format("%Y-%m-%d %H:%M:%S"),
            last = %last.format("%Y-%m-%d %H:%M:%S"),
            "timeline span (UTC)"
        );
    }
}
