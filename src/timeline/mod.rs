//! Timeline reconstruction from viminfo lines
//!
//! Combines the flat-record pass and the edit-history pass into one ordered
//! event list and reports what was found.

pub mod builder;

pub use builder::{Timeline, TimelineStats, build_timeline, classify_records};
