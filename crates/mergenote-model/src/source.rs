use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A text source loaded for merging.
///
/// Held in memory only for the duration of a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Display name, normally the file name without directories.
    pub name: String,
    /// Full decoded text of the source.
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// The source text prefixed with its `#FILE:` header line.
    pub fn with_header(&self) -> String {
        format!("#FILE:{}\n{}", self.name, self.text)
    }
}

/// An ordered set of non-empty lines, unique by exact string match.
///
/// Lines keep the order in which they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSet {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line. Returns `true` if it was added, `false` if it was
    /// empty or already present.
    pub fn insert(&mut self, line: &str) -> bool {
        if line.is_empty() || self.seen.contains(line) {
            return false;
        }
        self.seen.insert(line.to_string());
        self.lines.push(line.to_string());
        true
    }

    pub fn contains(&self, line: &str) -> bool {
        self.seen.contains(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Join all lines with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Line accounting for a single merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeStats {
    pub files: usize,
    pub total_lines: usize,
    pub kept_lines: usize,
    pub duplicate_lines: usize,
    pub empty_lines: usize,
}

/// Result of merging and deduplicating a batch of sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutput {
    /// Concatenated sources with headers, before any cleaning.
    pub merged: String,
    /// Trimmed, deduplicated, non-empty lines joined with `\n`.
    pub clean: String,
    pub stats: MergeStats,
}
