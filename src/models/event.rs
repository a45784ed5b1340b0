use chrono::{DateTime, Utc};

/// A single timeline event: epoch seconds plus a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub epochtime: i64,
    pub message: String,
}

impl Event {
    pub fn new(epochtime: i64, message: impl Into<String>) -> Self {
        Self { epochtime, message: message.into() }
    }

    /// The event time as a UTC datetime, if representable
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.epochtime, 0)
    }
}
