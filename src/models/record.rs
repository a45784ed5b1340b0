use std::fmt;

/// Which flat record shape a line matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Command,
    Search,
    Register,
    MarkJump,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Command => "command",
            RecordKind::Search => "search",
            RecordKind::Register => "register",
            RecordKind::MarkJump => "mark/jump",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Register content type, from the type code field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterType {
    /// Code `0` and anything unrecognised
    Char,
    /// Code `1`
    Line,
    /// Code `2`; `chars` is stored zero-based
    VisualBlock { lines: i64, chars: i64 },
}

/// A flat viminfo history line split into its typed fields.
///
/// Text fields are kept verbatim (including viminfo's surrounding quotes) so
/// the rendered messages reproduce the source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedRecord {
    /// `|2,0,<time>,,<command>`
    Command { epochtime: i64, command: String },
    /// `|2,1,<time>,<direction>,<pattern>`
    Search { epochtime: i64, direction: String, pattern: String },
    /// `|3,<flags>,<name>,<type>,<lines>,<chars>,<time>,<content>`
    Register {
        epochtime: i64,
        name: String,
        reg_type: RegisterType,
        /// Line count as written in the file
        lines: String,
        content: String,
    },
    /// `|4,<state>,<line>,<char>,<time>,<filename>`
    MarkJump { epochtime: i64, state: i64, line: String, chars: String, filename: String },
}

impl ClassifiedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ClassifiedRecord::Command { .. } => RecordKind::Command,
            ClassifiedRecord::Search { .. } => RecordKind::Search,
            ClassifiedRecord::Register { .. } => RecordKind::Register,
            ClassifiedRecord::MarkJump { .. } => RecordKind::MarkJump,
        }
    }

    pub fn epochtime(&self) -> i64 {
        match self {
            ClassifiedRecord::Command { epochtime, .. }
            | ClassifiedRecord::Search { epochtime, .. }
            | ClassifiedRecord::Register { epochtime, .. }
            | ClassifiedRecord::MarkJump { epochtime, .. } => *epochtime,
        }
    }
}
