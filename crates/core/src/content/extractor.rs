//! Per-block-type text extraction rules

use deskhub_domain::{Block, BlockKind, TextRun};

/// Bold markup wrapped around heading text on both sides.
const HEADING_MARKER: &str = "**";

/// Maps a flat block sequence to an ordered sequence of text fragments.
///
/// Operates purely on already-fetched in-memory data and never fails: blocks
/// whose type carries no extractable text are dropped, while text-bearing
/// blocks always contribute exactly one entry - an empty string when they
/// hold no runs.
pub struct TextExtractor;

impl TextExtractor {
    /// Render each text-bearing block to one string, preserving input order.
    pub fn extract(blocks: &[Block]) -> Vec<String> {
        blocks.iter().filter_map(Self::render).collect()
    }

    /// Render one block, or `None` for types the gateway does not surface.
    fn render(block: &Block) -> Option<String> {
        match &block.kind {
            BlockKind::Paragraph { rich_text }
            | BlockKind::BulletedListItem { rich_text }
            | BlockKind::NumberedListItem { rich_text }
            | BlockKind::ToDo { rich_text } => Some(concat_runs(rich_text)),
            BlockKind::Heading1 { rich_text }
            | BlockKind::Heading2 { rich_text }
            | BlockKind::Heading3 { rich_text } => {
                Some(format!("{HEADING_MARKER}{}{HEADING_MARKER}", concat_runs(rich_text)))
            }
            BlockKind::ChildPage { title } => Some(title.clone()),
            BlockKind::Unsupported => None,
        }
    }
}

/// Concatenate the plain text of all runs, in order, with no separator.
fn concat_runs(runs: &[TextRun]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(texts: &[&str]) -> Vec<TextRun> {
        texts.iter().copied().map(TextRun::new).collect()
    }

    #[test]
    fn drops_unsupported_blocks_and_keeps_the_rest() {
        let blocks = vec![
            Block::leaf("p", BlockKind::Paragraph { rich_text: runs(&["one"]) }),
            Block::leaf("h", BlockKind::Heading2 { rich_text: runs(&["two"]) }),
            Block::leaf("c", BlockKind::ChildPage { title: "three".into() }),
            Block::leaf("x", BlockKind::Unsupported),
        ];

        let text = TextExtractor::extract(&blocks);
        assert_eq!(text, vec!["one", "**two**", "three"]);
    }

    #[test]
    fn concatenates_runs_without_separator() {
        let blocks = vec![Block::leaf(
            "p",
            BlockKind::Paragraph { rich_text: runs(&["Hello, ", "world", "!"]) },
        )];

        assert_eq!(TextExtractor::extract(&blocks), vec!["Hello, world!"]);
    }

    #[test]
    fn wraps_headings_in_bold_markers() {
        let blocks = vec![Block::leaf("h", BlockKind::Heading1 { rich_text: runs(&["Intro"]) })];
        assert_eq!(TextExtractor::extract(&blocks), vec!["**Intro**"]);
    }

    #[test]
    fn empty_heading_still_gets_markers() {
        let blocks = vec![Block::leaf("h", BlockKind::Heading1 { rich_text: vec![] })];
        assert_eq!(TextExtractor::extract(&blocks), vec!["****"]);
    }

    #[test]
    fn empty_paragraph_emits_empty_entry_not_nothing() {
        let blocks = vec![
            Block::leaf("p1", BlockKind::Paragraph { rich_text: vec![] }),
            Block::leaf("p2", BlockKind::Paragraph { rich_text: runs(&["after"]) }),
        ];

        let text = TextExtractor::extract(&blocks);
        assert_eq!(text, vec!["", "after"]);
    }

    #[test]
    fn list_items_and_todos_render_like_paragraphs() {
        let blocks = vec![
            Block::leaf("b", BlockKind::BulletedListItem { rich_text: runs(&["bullet"]) }),
            Block::leaf("n", BlockKind::NumberedListItem { rich_text: runs(&["numbered"]) }),
            Block::leaf("t", BlockKind::ToDo { rich_text: runs(&["task"]) }),
        ];

        assert_eq!(TextExtractor::extract(&blocks), vec!["bullet", "numbered", "task"]);
    }

    #[test]
    fn child_page_title_passes_through_unwrapped() {
        let blocks = vec![
            Block::leaf("c1", BlockKind::ChildPage { title: "Sub Page".into() }),
            Block::leaf("c2", BlockKind::ChildPage { title: String::new() }),
        ];

        assert_eq!(TextExtractor::extract(&blocks), vec!["Sub Page", ""]);
    }

    #[test]
    fn preserves_input_order() {
        let blocks = vec![
            Block::leaf("1", BlockKind::Heading1 { rich_text: runs(&["first"]) }),
            Block::leaf("2", BlockKind::Unsupported),
            Block::leaf("3", BlockKind::Paragraph { rich_text: runs(&["second"]) }),
            Block::leaf("4", BlockKind::ToDo { rich_text: runs(&["third"]) }),
        ];

        assert_eq!(TextExtractor::extract(&blocks), vec!["**first**", "second", "third"]);
    }
}
