//! Data models for viminfo history reconstruction.
//!
//! - [`ClassifiedRecord`] - one flat history line (command, search, register, mark/jump)
//! - [`FileSegment`] / [`TaggedEntry`] - the per-file "history of marks within files" block
//! - [`Event`] - a timestamped timeline entry ready for rendering

pub mod event;
pub mod record;
pub mod segment;

pub use event::Event;
pub use record::{ClassifiedRecord, RecordKind, RegisterType};
pub use segment::{EditEntry, FileSegment, TaggedEntry};
