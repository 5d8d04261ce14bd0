//! Hierarchical document content blocks
//!
//! A [`Block`] is one node in a page's content tree. The payload is a closed
//! tagged union ([`BlockKind`]) with one variant per recognized block type and
//! an explicit [`BlockKind::Unsupported`] catch-all, so formatting code is an
//! exhaustive match rather than open-ended string comparison.

use serde::{Deserialize, Serialize};

/// A contiguous span of plain text within a block's rich content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The rendered plain-text content of the span.
    pub plain_text: String,
}

impl TextRun {
    /// Build a run from any string-ish value.
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self { plain_text: plain_text.into() }
    }
}

/// Type-dependent payload of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Plain paragraph text.
    Paragraph {
        /// Ordered rich-text runs; empty when the paragraph has no text.
        rich_text: Vec<TextRun>,
    },
    /// Top-level heading.
    Heading1 {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// Second-level heading.
    Heading2 {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// Third-level heading.
    Heading3 {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// Bulleted list item.
    BulletedListItem {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// Numbered list item.
    NumberedListItem {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// Checklist item.
    ToDo {
        /// Ordered rich-text runs.
        rich_text: Vec<TextRun>,
    },
    /// An embedded child page; carries the page title rather than rich text.
    ChildPage {
        /// Title of the embedded page; empty when the source omits it.
        title: String,
    },
    /// Any block type this gateway does not render (tables, embeds, ...).
    Unsupported,
}

/// A node in a hierarchical content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque identifier, unique within the workspace. Immutable once fetched.
    pub id: String,
    /// True iff the source may hold descendant blocks under this id.
    pub has_children: bool,
    /// Type tag and payload.
    pub kind: BlockKind,
}

impl Block {
    /// Build a leaf block (no children) with the given payload.
    pub fn leaf(id: impl Into<String>, kind: BlockKind) -> Self {
        Self { id: id.into(), has_children: false, kind }
    }

    /// Build a block flagged as having fetchable descendants.
    pub fn parent(id: impl Into<String>, kind: BlockKind) -> Self {
        Self { id: id.into(), has_children: true, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_kind_serializes_with_type_tag() {
        let block = Block::leaf(
            "b1",
            BlockKind::Paragraph { rich_text: vec![TextRun::new("hello")] },
        );
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"]["type"], "paragraph");
        assert_eq!(json["kind"]["rich_text"][0]["plain_text"], "hello");
    }

    #[test]
    fn unsupported_round_trips() {
        let block = Block::leaf("b2", BlockKind::Unsupported);
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
