/// The edit history of one file: its header line followed by tagged entries,
/// in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSegment {
    pub lines: Vec<String>,
}

impl FileSegment {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A tab-delimited position record inside a segment, e.g. `\t"\t3\t9`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntry {
    pub tag: String,
    /// Line number, or the segment's epoch timestamp when `tag` is `*`
    pub line: String,
    pub chars: String,
}

/// One decomposed line of a [`FileSegment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEntry {
    /// `> <filename>` (any line holding a space)
    Header { filename: String },
    Tagged(TaggedEntry),
}
