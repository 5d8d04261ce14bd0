//! Hierarchical content extraction engine
//!
//! Walks an externally-hosted tree of content blocks rooted at a page and
//! flattens it into an ordered sequence of text fragments:
//!
//! - [`BlockSource`] - port over the remote children-of-a-block lookup
//! - [`BlockTreeCollector`] - iterative traversal producing a flat,
//!   reading-ordered block sequence
//! - [`TextExtractor`] - per-block-type formatting and filtering
//! - [`PageContentService`] - the entry point the gateway boundary calls

pub mod collector;
pub mod extractor;
pub mod ports;
pub mod service;

pub use collector::BlockTreeCollector;
pub use extractor::TextExtractor;
pub use ports::BlockSource;
pub use service::PageContentService;
