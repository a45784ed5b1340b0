//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for viminfo files written into a temporary directory
pub struct ViminfoBuilder {
    temp_dir: TempDir,
    sections: Vec<String>,
    edit_segments: Vec<EditSegmentBuilder>,
}

impl ViminfoBuilder {
    /// Create a new builder with an empty viminfo body
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, sections: Vec::new(), edit_segments: Vec::new() }
    }

    /// Add a raw line (or several, newline separated) before the edit history block
    pub fn with_line(mut self, line: &str) -> Self {
        self.sections.push(line.to_string());
        self
    }

    /// Add a command history record
    pub fn with_command(self, epochtime: i64, command: &str) -> Self {
        self.with_line(&format!(r#"|2,0,{},,"{}""#, epochtime, command))
    }

    /// Add a search history record
    pub fn with_search(self, epochtime: i64, direction: u32, pattern: &str) -> Self {
        self.with_line(&format!(r#"|2,1,{},{},"{}""#, epochtime, direction, pattern))
    }

    /// Add a register record
    pub fn with_register(
        self,
        name: &str,
        reg_type: u32,
        lines: u32,
        chars: u32,
        epochtime: i64,
        content: &str,
    ) -> Self {
        self.with_line(&format!(
            r#"|3,0,{},{},{},{},{},"{}""#,
            name, reg_type, lines, chars, epochtime, content
        ))
    }

    /// Add a file mark or jumplist record
    pub fn with_mark(self, state: u32, line: u32, chars: u32, epochtime: i64, file: &str) -> Self {
        self.with_line(&format!(r#"|4,{},{},{},{},"{}""#, state, line, chars, epochtime, file))
    }

    /// Add a per-file edit history segment
    pub fn with_edit_segment(mut self, segment: EditSegmentBuilder) -> Self {
        self.edit_segments.push(segment);
        self
    }

    /// Render the file content
    pub fn content(&self) -> String {
        let mut out = String::from("# This viminfo file was generated by Vim 9.0.\n|1,4\n\n");
        for section in &self.sections {
            out.push_str(section);
            out.push('\n');
        }
        if !self.edit_segments.is_empty() {
            out.push_str("\n# History of marks within files (newest to oldest):\n\n");
            for segment in &self.edit_segments {
                out.push_str(&segment.render());
                out.push('\n');
            }
        }
        out
    }

    /// Write the file and return the temp dir together with the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let content = self.content();
        let path = self.temp_dir.path().join(".viminfo");
        fs::write(&path, content).expect("Failed to write viminfo");
        (self.temp_dir, path)
    }
}

impl Default for ViminfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one file's block in the edit history section
pub struct EditSegmentBuilder {
    filename: String,
    entries: Vec<String>,
}

impl EditSegmentBuilder {
    /// Start a segment for the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), entries: Vec::new() }
    }

    /// Add the `*` timestamp entry
    pub fn timestamp(self, epochtime: i64) -> Self {
        self.entry('*', &epochtime.to_string(), "0")
    }

    /// Add a tagged position entry
    pub fn tag(self, tag: char, line: u32, chars: u32) -> Self {
        self.entry(tag, &line.to_string(), &chars.to_string())
    }

    fn entry(mut self, tag: char, line: &str, chars: &str) -> Self {
        self.entries.push(format!("\t{}\t{}\t{}", tag, line, chars));
        self
    }

    /// Render the segment, terminated by a newline
    pub fn render(&self) -> String {
        let mut out = format!("> {}\n", self.filename);
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }
}

/// A realistic viminfo file exercising every record kind
pub fn realistic_viminfo() -> (TempDir, PathBuf) {
    ViminfoBuilder::new()
        .with_line("# Command Line History (newest to oldest):\n:wq")
        .with_command(1655640853, "wq")
        .with_line(":!cat /etc/passwd | grep root")
        .with_command(1655640800, "!cat /etc/passwd | grep root")
        .with_line("\n# Search String History (newest to oldest):\n?/password")
        .with_search(1656165977, 47, "password")
        .with_line("\n# Registers:\n\"-\tCHAR\t0\n\tsecret")
        .with_register("36", 0, 1, 5, 1655566900, "secret")
        .with_register("0", 2, 1, 0, 1655566954, "x")
        .with_line("\n# File marks:\n'0  1  0  ~/check_vulns.conf")
        .with_mark(48, 1, 0, 1656161664, "~/check_vulns.conf")
        .with_line("\n# Jumplist (newest first):\n-'  3  9  ~/notes.txt")
        .with_mark(39, 3, 9, 1656161000, "~/notes.txt")
        .with_edit_segment(
            EditSegmentBuilder::new("~/check_vulns.conf")
                .timestamp(1656161664)
                .tag('"', 3, 9)
                .tag('^', 3, 10)
                .tag('.', 3, 9)
                .tag('+', 2, 0)
                .tag('+', 3, 9),
        )
        .with_edit_segment(EditSegmentBuilder::new("~/notes.txt").timestamp(1656161000).tag('"', 1, 0))
        .build()
}

/// Split a body row into its columns
pub fn columns(row: &str) -> Vec<&str> {
    row.split('|').collect()
}

/// Read a file's content, panicking on failure
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
