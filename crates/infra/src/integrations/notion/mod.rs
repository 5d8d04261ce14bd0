//! Notion integration module
//!
//! Implements the document-workspace ports against the Notion REST API:
//! - block children listing (the extraction engine's `BlockSource`)
//! - database/page search, database query and schema, page updates

pub mod client;
pub mod types;

pub use client::NotionClient;
