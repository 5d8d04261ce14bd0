//! Notion wire types (before conversion into domain models)
//!
//! Every payload field is defaulted: a malformed or truncated block record
//! degrades to an empty payload, never a parse error.

use deskhub_domain::constants::{UNNAMED_DATABASE_TITLE, UNNAMED_PAGE_TITLE};
use deskhub_domain::{Block, BlockKind, DatabaseSummary, PageSummary, TextRun};
use serde::Deserialize;
use serde_json::Value;

/// One page of a block-children listing.
#[derive(Debug, Deserialize)]
pub(crate) struct BlockListResponse {
    #[serde(default)]
    pub results: Vec<NotionBlock>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// A raw block record. Notion keys the payload by the value of `type`, so
/// the struct carries one optional payload slot per recognized type.
#[derive(Debug, Deserialize)]
pub(crate) struct NotionBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    paragraph: Option<RichTextPayload>,
    #[serde(default)]
    heading_1: Option<RichTextPayload>,
    #[serde(default)]
    heading_2: Option<RichTextPayload>,
    #[serde(default)]
    heading_3: Option<RichTextPayload>,
    #[serde(default)]
    bulleted_list_item: Option<RichTextPayload>,
    #[serde(default)]
    numbered_list_item: Option<RichTextPayload>,
    #[serde(default)]
    to_do: Option<RichTextPayload>,
    #[serde(default)]
    child_page: Option<ChildPagePayload>,
}

#[derive(Debug, Default, Deserialize)]
struct RichTextPayload {
    #[serde(default)]
    rich_text: Vec<RichTextElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RichTextElement {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Default, Deserialize)]
struct ChildPagePayload {
    #[serde(default)]
    title: String,
}

impl NotionBlock {
    /// Convert into the domain block, mapping unknown types to
    /// [`BlockKind::Unsupported`] and missing payloads to empty ones.
    pub fn into_block(self) -> Block {
        let kind = match self.block_type.as_str() {
            "paragraph" => BlockKind::Paragraph { rich_text: runs(self.paragraph) },
            "heading_1" => BlockKind::Heading1 { rich_text: runs(self.heading_1) },
            "heading_2" => BlockKind::Heading2 { rich_text: runs(self.heading_2) },
            "heading_3" => BlockKind::Heading3 { rich_text: runs(self.heading_3) },
            "bulleted_list_item" => {
                BlockKind::BulletedListItem { rich_text: runs(self.bulleted_list_item) }
            }
            "numbered_list_item" => {
                BlockKind::NumberedListItem { rich_text: runs(self.numbered_list_item) }
            }
            "to_do" => BlockKind::ToDo { rich_text: runs(self.to_do) },
            "child_page" => BlockKind::ChildPage {
                title: self.child_page.unwrap_or_default().title,
            },
            _ => BlockKind::Unsupported,
        };

        Block { id: self.id, has_children: self.has_children, kind }
    }
}

fn runs(payload: Option<RichTextPayload>) -> Vec<TextRun> {
    payload
        .unwrap_or_default()
        .rich_text
        .into_iter()
        .map(|element| TextRun { plain_text: element.plain_text })
        .collect()
}

/// One page of a search result listing.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// One page of a database query.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Summarize a raw database search result.
pub(crate) fn database_summary(record: &Value) -> DatabaseSummary {
    let id = string_field(record, "id");
    let title = record
        .get("title")
        .and_then(Value::as_array)
        .and_then(|title| title.first())
        .and_then(|element| element.get("plain_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNNAMED_DATABASE_TITLE)
        .to_string();

    DatabaseSummary { id, title }
}

/// Summarize a raw page search result.
///
/// The title lives in the page's `title` property; pages without one (or
/// with an empty one) fall back to the unnamed placeholder.
pub(crate) fn page_summary(record: &Value) -> PageSummary {
    let title = record
        .pointer("/properties/title/title")
        .and_then(Value::as_array)
        .and_then(|title| title.first())
        .and_then(|element| element.get("plain_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNNAMED_PAGE_TITLE)
        .to_string();

    PageSummary {
        id: string_field(record, "id"),
        title,
        created_time: optional_string_field(record, "created_time"),
        last_edited_time: optional_string_field(record, "last_edited_time"),
        url: optional_string_field(record, "url"),
    }
}

fn string_field(record: &Value, key: &str) -> String {
    record.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn optional_string_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(ToString::to_string)
}
