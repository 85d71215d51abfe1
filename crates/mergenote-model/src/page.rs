use serde::{Deserialize, Serialize};

/// Body of a Notion "create page" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub parent: PageParent,
    pub properties: PageProperties,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageParent {
    pub page_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperties {
    pub title: Vec<RichText>,
}

/// A content block. Only paragraphs are produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub paragraph: Paragraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

/// A plain text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: RichTextKind,
    pub text: TextContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextKind {
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

impl Block {
    /// A paragraph block holding a single plain text run.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Paragraph,
            paragraph: Paragraph {
                rich_text: vec![RichText::plain(content)],
            },
        }
    }

    /// Text of the block's first run, if any.
    pub fn text(&self) -> Option<&str> {
        self.paragraph
            .rich_text
            .first()
            .map(|r| r.text.content.as_str())
    }
}

/// The part of a created-page response the tool reports back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_request_json_shape() {
        let request = PageRequest {
            parent: PageParent {
                page_id: "abc123".into(),
            },
            properties: PageProperties {
                title: vec![RichText::plain("Merged note")],
            },
            children: vec![Block::paragraph("Hello")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "parent": { "page_id": "abc123" },
                "properties": {
                    "title": [ { "type": "text", "text": { "content": "Merged note" } } ]
                },
                "children": [
                    {
                        "type": "paragraph",
                        "paragraph": {
                            "rich_text": [ { "type": "text", "text": { "content": "Hello" } } ]
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_created_page_ignores_extra_fields() {
        let page: CreatedPage = serde_json::from_str(
            r#"{"object":"page","id":"p-1","url":"https://www.notion.so/p-1","archived":false}"#,
        )
        .unwrap();
        assert_eq!(page.id, "p-1");
        assert_eq!(page.url.as_deref(), Some("https://www.notion.so/p-1"));

        let bare: CreatedPage = serde_json::from_str(r#"{"id":"p-2"}"#).unwrap();
        assert_eq!(bare.url, None);
    }
}
