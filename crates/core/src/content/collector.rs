//! Block tree traversal - core extraction logic

use std::collections::VecDeque;
use std::sync::Arc;

use deskhub_domain::{Block, Result};
use tracing::debug;

use super::ports::BlockSource;

/// Collects every block transitively reachable from a root identifier.
///
/// Traversal is iterative over an explicit frontier rather than recursive:
/// every expansion step is a remote call, and the tree depth is not under
/// this process's control. Blocks are emitted in depth-first pre-order, i.e.
/// the document's top-to-bottom reading order: a block, then its entire
/// subtree, then its next sibling.
pub struct BlockTreeCollector {
    source: Arc<dyn BlockSource>,
}

impl BlockTreeCollector {
    /// Create a collector over the given block source.
    pub fn new(source: Arc<dyn BlockSource>) -> Self {
        Self { source }
    }

    /// Collect all descendants of `root_id`, in reading order.
    ///
    /// The root block itself is never part of the output; traversal starts
    /// from its direct children. Each fetch is awaited before the next one
    /// starts, so the emitted order is deterministic.
    ///
    /// # Errors
    /// Fails with the underlying source error if any children fetch fails.
    /// Partial results are discarded, never returned.
    pub async fn collect(&self, root_id: &str) -> Result<Vec<Block>> {
        let mut collected = Vec::new();
        let mut frontier: VecDeque<Block> =
            self.source.fetch_children(root_id).await?.into();

        while let Some(block) = frontier.pop_front() {
            if block.has_children {
                // Splice children onto the front, ahead of the block's
                // later siblings, preserving their fetch order.
                let children = self.source.fetch_children(&block.id).await?;
                for (offset, child) in children.into_iter().enumerate() {
                    frontier.insert(offset, child);
                }
            }
            collected.push(block);
        }

        debug!(root_id, blocks = collected.len(), "collected block tree");
        Ok(collected)
    }
}
