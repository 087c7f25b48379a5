use serde::Deserialize;

use super::Status;

/// A long-form authored editorial article
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "InsightRecord")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_role: String,
    pub excerpt: String,
    /// Display date (YYYY-MM-DD)
    pub date: String,
    pub status: Status,
    pub tags: Vec<String>,
    /// Optional link to the full article elsewhere
    pub url: Option<String>,
    pub body: InsightBody,
    /// Markdown document next to the item JSON, resolved by the loader
    pub markdown_file: Option<String>,
}

/// The article body. Each variant has its own rendering path.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightBody {
    Paragraphs(Vec<String>),
    Blocks(Vec<ContentBlock>),
    Markdown(String),
}

impl InsightBody {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs.iter().all(|p| p.trim().is_empty()),
            Self::Blocks(blocks) => blocks.is_empty(),
            Self::Markdown(text) => text.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        attribution: Option<String>,
    },
    List {
        items: Vec<String>,
    },
}

impl Insight {
    /// Swap in a fetched markdown document as the article body
    pub fn attach_markdown(&mut self, markdown: String) {
        self.body = InsightBody::Markdown(markdown);
    }
}

/// Wire shape of an insight; body fields are flattened alongside metadata
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsightRecord {
    id: String,
    title: String,
    author: String,
    author_role: String,
    excerpt: String,
    #[serde(default)]
    paragraphs: Vec<String>,
    #[serde(default)]
    content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default)]
    markdown_file: Option<String>,
    date: String,
    status: Status,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<InsightRecord> for Insight {
    fn from(record: InsightRecord) -> Self {
        let body = match record.content_blocks {
            Some(blocks) if !blocks.is_empty() => InsightBody::Blocks(blocks),
            _ => InsightBody::Paragraphs(record.paragraphs),
        };

        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            author_role: record.author_role,
            excerpt: record.excerpt,
            date: record.date,
            status: record.status,
            tags: record.tags,
            url: record.url,
            body,
            markdown_file: record.markdown_file.filter(|f| !f.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_json(extra: &str) -> String {
        format!(
            r#"{{
                "id": "ins-1",
                "title": "The Socio-Technical Shift",
                "author": "Dr. Sarah Jenkins",
                "authorRole": "Research Lead",
                "excerpt": "Semantics become human work.",
                "date": "2026-02-04",
                "status": "published"{}
            }}"#,
            extra
        )
    }

    #[test]
    fn test_paragraph_body() {
        let insight: Insight =
            serde_json::from_str(&base_json(r#", "paragraphs": ["one", "two"]"#)).unwrap();
        assert_eq!(
            insight.body,
            InsightBody::Paragraphs(vec!["one".to_string(), "two".to_string()])
        );
        assert!(insight.markdown_file.is_none());
    }

    #[test]
    fn test_blocks_win_over_paragraphs() {
        let insight: Insight = serde_json::from_str(&base_json(
            r#", "paragraphs": ["ignored"],
                "contentBlocks": [
                    {"type": "heading", "text": "Intro"},
                    {"type": "quote", "text": "Code is cheap", "attribution": "Someone"},
                    {"type": "list", "items": ["a", "b"]}
                ]"#,
        ))
        .unwrap();

        match insight.body {
            InsightBody::Blocks(blocks) => {
                assert_eq!(blocks.len(), 3);
                assert_eq!(
                    blocks[1],
                    ContentBlock::Quote {
                        text: "Code is cheap".to_string(),
                        attribution: Some("Someone".to_string()),
                    }
                );
            }
            other => panic!("expected blocks, got {:?}", other),
        }
    }

    #[test]
    fn test_markdown_reference_keeps_inline_body() {
        let mut insight: Insight = serde_json::from_str(&base_json(
            r#", "paragraphs": ["inline"], "markdownFile": "shift.md""#,
        ))
        .unwrap();
        assert_eq!(insight.markdown_file.as_deref(), Some("shift.md"));
        assert_eq!(insight.body, InsightBody::Paragraphs(vec!["inline".to_string()]));

        insight.attach_markdown("# Heading".to_string());
        assert_eq!(insight.body, InsightBody::Markdown("# Heading".to_string()));
    }

    #[test]
    fn test_empty_body() {
        let insight: Insight = serde_json::from_str(&base_json("")).unwrap();
        assert!(insight.body.is_empty());
    }
}
