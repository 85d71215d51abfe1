use std::sync::LazyLock;

use mergenote_model::{LineSet, MergeOutput, MergeStats, SourceFile};
use regex::Regex;

pub mod output;
pub mod read;

pub use read::{read_sources, ReadOutcome, SkippedSource};

static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"));

/// Merge sources into one text and a deduplicated line list.
///
/// Each source is prefixed with its `#FILE:` header and the items are joined
/// with a blank line. The joined text is split on any newline variant, every
/// line is trimmed, empty lines are dropped, and only the first occurrence of
/// each distinct line is kept.
pub fn merge_sources(sources: &[SourceFile]) -> MergeOutput {
    let merged = sources
        .iter()
        .map(SourceFile::with_header)
        .collect::<Vec<_>>()
        .join("\n\n");

    let (lines, mut stats) = dedupe_lines(&merged);
    stats.files = sources.len();

    tracing::debug!(
        files = stats.files,
        total = stats.total_lines,
        kept = stats.kept_lines,
        duplicates = stats.duplicate_lines,
        empty = stats.empty_lines,
        "Merged sources"
    );

    MergeOutput {
        clean: lines.to_text(),
        merged,
        stats,
    }
}

/// Split text into trimmed, unique, non-empty lines in first-seen order.
pub fn dedupe_lines(text: &str) -> (LineSet, MergeStats) {
    let mut lines = LineSet::new();
    let mut stats = MergeStats::default();

    for raw in NEWLINE.split(text) {
        stats.total_lines += 1;
        let line = raw.trim_matches(is_trimmed);
        if line.is_empty() {
            stats.empty_lines += 1;
        } else if !lines.insert(line) {
            stats.duplicate_lines += 1;
        }
    }
    stats.kept_lines = lines.len();

    (lines, stats)
}

/// Whitespace plus the zero-width no-break space left over from byte order marks.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
