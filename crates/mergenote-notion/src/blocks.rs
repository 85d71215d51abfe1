// Page body construction.
//
// The body is cut into paragraphs at blank lines. At most MAX_BLOCKS pieces
// are considered, blank pieces among them are skipped, and every paragraph is
// cut to MAX_BLOCK_CHARS characters.

use std::sync::LazyLock;

use mergenote_model::{Block, PageParent, PageProperties, PageRequest, RichText};
use regex::Regex;

pub const MAX_BLOCKS: usize = 40;
/// Counted in Unicode scalar values (`char`s), not UTF-16 code units.
pub const MAX_BLOCK_CHARS: usize = 2000;
pub const DEFAULT_TITLE: &str = "Generated note";

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").expect("valid regex"));

/// Split body text into paragraph blocks.
pub fn paragraph_blocks(content: &str) -> Vec<Block> {
    PARAGRAPH_BREAK
        .split(content)
        .take(MAX_BLOCKS)
        .filter(|p| !p.trim().is_empty())
        .map(|p| Block::paragraph(truncate_chars(p, MAX_BLOCK_CHARS)))
        .collect()
}

/// Build the full create-page request body.
pub fn page_request(parent_page_id: &str, title: &str, content: &str) -> PageRequest {
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    PageRequest {
        parent: PageParent {
            page_id: parent_page_id.to_string(),
        },
        properties: PageProperties {
            title: vec![RichText::plain(title)],
        },
        children: paragraph_blocks(content),
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let blocks = paragraph_blocks("first\nstill first\n\nsecond\n\n\n\nthird");
        let texts: Vec<_> = blocks.iter().filter_map(Block::text).collect();
        assert_eq!(texts, vec!["first\nstill first", "second", "third"]);
    }

    #[test]
    fn test_blocks_beyond_limit_dropped() {
        let content = (1..=45).map(|i| format!("p{i}")).collect::<Vec<_>>().join("\n\n");
        let blocks = paragraph_blocks(&content);
        assert_eq!(blocks.len(), MAX_BLOCKS);
        assert_eq!(blocks[0].text(), Some("p1"));
        assert_eq!(blocks[39].text(), Some("p40"));
    }

    #[test]
    fn test_blank_pieces_count_toward_limit() {
        let mut pieces = vec!["  ".to_string()];
        pieces.extend((1..=40).map(|i| format!("p{i}")));
        let blocks = paragraph_blocks(&pieces.join("\n\n"));
        assert_eq!(blocks.len(), 39);
        assert_eq!(blocks[38].text(), Some("p39"));
    }

    #[test]
    fn test_paragraph_truncated() {
        let long = "ż".repeat(2500);
        let blocks = paragraph_blocks(&long);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text().unwrap().chars().count(), MAX_BLOCK_CHARS);

        let exact = "a".repeat(MAX_BLOCK_CHARS);
        assert_eq!(paragraph_blocks(&exact)[0].text(), Some(exact.as_str()));
    }

    #[test]
    fn test_page_request_default_title() {
        let request = page_request("parent-1", "", "body");
        assert_eq!(request.parent.page_id, "parent-1");
        assert_eq!(request.properties.title[0].text.content, DEFAULT_TITLE);
        assert_eq!(request.children.len(), 1);

        let request = page_request("parent-1", "Merged note", "");
        assert_eq!(request.properties.title[0].text.content, "Merged note");
        assert!(request.children.is_empty());
    }
}
