//! Page content service - the extraction engine's boundary entry point

use std::sync::Arc;

use deskhub_domain::Result;

use super::collector::BlockTreeCollector;
use super::extractor::TextExtractor;
use super::ports::BlockSource;

/// Orchestrates collection and extraction for one page.
pub struct PageContentService {
    collector: BlockTreeCollector,
}

impl PageContentService {
    /// Create a service over the given block source.
    pub fn new(source: Arc<dyn BlockSource>) -> Self {
        Self { collector: BlockTreeCollector::new(source) }
    }

    /// Flattened text of every block under `root_id`, in reading order.
    ///
    /// # Errors
    /// Propagates the collector's failure unchanged; extraction itself never
    /// fails, so this is the only error path. No partial text is returned.
    pub async fn get_text(&self, root_id: &str) -> Result<Vec<String>> {
        let blocks = self.collector.collect(root_id).await?;
        Ok(TextExtractor::extract(&blocks))
    }
}
