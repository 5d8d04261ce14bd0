//! Document-workspace port interfaces
//!
//! Pass-through operations against the document service. Database rows,
//! schemas, and property updates stay opaque (`serde_json::Value`): the
//! gateway forwards them verbatim and never interprets their shape.

use async_trait::async_trait;
use deskhub_domain::{DatabaseSummary, PageSummary, Result};
use serde_json::Value;

/// Trait for document-workspace operations.
#[async_trait]
pub trait WorkspacePort: Send + Sync {
    /// List all databases the integration can see.
    async fn search_databases(&self) -> Result<Vec<DatabaseSummary>>;

    /// List all pages the integration can see.
    async fn search_pages(&self) -> Result<Vec<PageSummary>>;

    /// Return the raw page records of a database.
    async fn query_database(&self, database_id: &str) -> Result<Vec<Value>>;

    /// Return a database's schema description.
    async fn database_schema(&self, database_id: &str) -> Result<Value>;

    /// Update a page's properties and return the updated record.
    async fn update_page(&self, page_id: &str, properties: Value) -> Result<Value>;
}
