//! Error types for viminfo parsing

use thiserror::Error;

use crate::models::RecordKind;

/// Decomposition failure for a flat history record.
///
/// Raised when a line carries a known record prefix but cannot be split into
/// the fields that record kind requires. These failures abort the run; edit
/// entries that fail to decompose are skipped instead (see [`crate::parsers::edits`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line matched a record prefix but had too few comma-separated fields
    #[error("malformed {kind} record on line {line_number}: expected {expected} fields, found {found}")]
    MalformedRecord { kind: RecordKind, line_number: usize, expected: usize, found: usize },

    /// A field that must be numeric was not
    #[error("invalid {field} '{value}' in {kind} record on line {line_number}")]
    InvalidNumber { kind: RecordKind, field: &'static str, line_number: usize, value: String },
}

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
