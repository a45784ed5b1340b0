//! Parsers for viminfo history files
//!
//! # Error Handling Strategy
//!
//! The two passes over a viminfo file treat bad input differently:
//!
//! - **Flat records** (command, search, register, mark/jump): a line that carries a
//!   record prefix but cannot be decomposed is a [`ParseError`](crate::error::ParseError)
//!   and fails the whole run. No records are dropped without signalling.
//!
//! - **Edit history entries**: entries that are neither a filename header nor a
//!   four-field tab-separated record are skipped (logged at debug level). Content
//!   entries that appear before any timestamp in their segment are suppressed.

pub mod classifier;
pub mod edits;
pub mod records;
pub mod segmenter;

pub use classifier::classify_line;
pub use edits::{edit_events, segment_events};
pub use records::record_event;
pub use segmenter::segment_edit_history;
