// Sentence splitting.
//
// A unit is a run of characters other than `.`, `!`, `?` and newline, plus at
// most one following terminator. Stray terminators that do not follow any
// text are dropped. An unterminated trailing fragment is still a unit.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?\n]+[.!?]?").expect("valid regex"));

/// Split text into untrimmed sentence-like units, in document order.
///
/// Whitespace-only runs between terminators are returned as units too.
/// If no unit is found at all, the whole text is the single unit.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let units: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();
    if units.is_empty() {
        vec![text]
    } else {
        units
    }
}
