//! viminfo-timeline - Build forensic timelines from Vim's `.viminfo` history
//!
//! This library turns one `.viminfo` file into timestamped events in the Sleuth
//! Kit `mactime` body format. It recovers:
//!
//! - Command-line and search history with their last-used times
//! - Register contents, including the small delete register
//! - File marks and jumplist entries (file opening, cursor position, write/close)
//! - Per-file edit history: exit, insert and change positions and edit locations
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use viminfo_timeline::{build_timeline, read_viminfo, render_row};
//!
//! let lines = read_viminfo(&PathBuf::from("/home/alice/.viminfo"))?;
//! let timeline = build_timeline(&lines)?;
//! for event in &timeline.events {
//!     println!("{}", render_row(event));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod timeline;
pub mod utils;

// Re-export commonly used types
pub use error::ParseError;
pub use models::{ClassifiedRecord, Event, FileSegment};
pub use output::{render_row, write_events};
pub use timeline::{Timeline, build_timeline};
pub use utils::read_viminfo;
