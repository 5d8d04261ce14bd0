//! Document-workspace summary and response types

use serde::{Deserialize, Serialize};

/// Summary of a database in the document workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSummary {
    /// Database identifier.
    pub id: String,
    /// Display title; `"Unnamed Database"` when the source has none.
    pub title: String,
}

/// Summary of a page in the document workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Page identifier.
    pub id: String,
    /// Display title; `"Unnamed Page"` when the title property is missing.
    pub title: String,
    /// Creation timestamp as reported by the source.
    pub created_time: Option<String>,
    /// Last-edit timestamp as reported by the source.
    pub last_edited_time: Option<String>,
    /// Canonical URL of the page.
    pub url: Option<String>,
}

/// Flattened text content of a page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// The page the content was extracted from.
    pub page_id: String,
    /// One entry per text-bearing block, in reading order.
    pub content: Vec<String>,
}
