//! Port interfaces for content extraction
//!
//! These traits define the boundary between the extraction engine and the
//! infrastructure implementation that talks to the document service.

use async_trait::async_trait;
use deskhub_domain::{Block, Result};

/// Trait for fetching the direct children of a content block.
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Fetch the direct children of `block_id`, in document order.
    ///
    /// Returns an empty vec (not an error) when the block has no children.
    /// Fails with [`deskhub_domain::DeskHubError::Network`] when the source is
    /// unreachable and [`deskhub_domain::DeskHubError::Auth`] when credentials
    /// are rejected.
    async fn fetch_children(&self, block_id: &str) -> Result<Vec<Block>>;
}
