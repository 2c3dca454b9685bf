//! Lexical page statistics.
//!
//! Counters reported alongside the score. They describe the page but do not
//! feed the score or the feedback.

use serde::Serialize;

use crate::classifier::is_question_heading;
use crate::content_map::{Block, BlockKind, Section};
use crate::options::Options;
use crate::patterns::{self, SENTENCE_END, TIME_SENSITIVE_OR_PERSONAL};

/// Maximum sentences in a quotable passage.
const MAX_QUOTABLE_SENTENCES: usize = 3;

/// Maximum words in any sentence of a quotable passage.
const MAX_QUOTABLE_SENTENCE_WORDS: usize = 20;

/// Structural counters for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageStats {
    /// Number of sections.
    pub sections: usize,
    /// Number of blocks across all sections.
    pub blocks: usize,
    /// Words across all blocks.
    pub words: usize,
    /// Sections whose heading reads as a question.
    pub question_headings: usize,
    /// Blocks containing definitional wording.
    pub definition_blocks: usize,
    /// `ul`/`ol` blocks.
    pub list_blocks: usize,
    /// Paragraphs short and neutral enough to be quoted verbatim.
    pub quotable_paragraphs: usize,
}

impl PageStats {
    /// Collect counters over the content map.
    #[must_use]
    pub fn collect(sections: &[Section], options: &Options) -> Self {
        let mut stats = Self {
            sections: sections.len(),
            ..Self::default()
        };

        for section in sections {
            if is_question_heading(&section.heading, options) {
                stats.question_headings += 1;
            }
            for block in &section.blocks {
                stats.blocks += 1;
                stats.words += block.word_count();
                if patterns::any_match(&options.definition_patterns, &block.text) {
                    stats.definition_blocks += 1;
                }
                if block.kind.is_list() {
                    stats.list_blocks += 1;
                }
                if is_quotable_paragraph(block) {
                    stats.quotable_paragraphs += 1;
                }
            }
        }

        stats
    }
}

/// A paragraph an answer engine could quote as-is.
fn is_quotable_paragraph(block: &Block) -> bool {
    block.kind == BlockKind::Paragraph && is_quotable(&block.text)
}

/// At most three sentences of at most twenty words each, with no
/// time-sensitive or first-person wording.
#[must_use]
pub fn is_quotable(text: &str) -> bool {
    let sentences: Vec<&str> = SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() || sentences.len() > MAX_QUOTABLE_SENTENCES {
        return false;
    }
    if sentences
        .iter()
        .any(|s| s.split_whitespace().count() > MAX_QUOTABLE_SENTENCE_WORDS)
    {
        return false;
    }

    !TIME_SENSITIVE_OR_PERSONAL.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotable_short_neutral_text() {
        assert!(is_quotable("AEO is the practice of structuring answers. It helps assistants."));
        assert!(is_quotable("A cache stores results"));
    }

    #[test]
    fn test_not_quotable() {
        assert!(!is_quotable(""));
        assert!(!is_quotable("One. Two. Three. Four."));
        assert!(!is_quotable(&"long ".repeat(21)));
        assert!(!is_quotable("Today the index is rebuilt."));
        assert!(!is_quotable("We recommend short answers."));
        assert!(!is_quotable("Check our guide."));
    }

    #[test]
    fn test_collect_counts() {
        let sections = vec![
            Section::new("What is AEO?")
                .with_block(BlockKind::Paragraph, "AEO is answer engine optimization.")
                .with_block(BlockKind::UnorderedList, "Lists\nHelp"),
            Section::new("History")
                .with_block(BlockKind::Paragraph, "We started in 2020 and grew quickly."),
        ];

        let stats = PageStats::collect(&sections, &Options::default());

        assert_eq!(stats.sections, 2);
        assert_eq!(stats.blocks, 3);
        assert_eq!(stats.words, 5 + 2 + 7);
        assert_eq!(stats.question_headings, 1);
        assert_eq!(stats.definition_blocks, 1);
        assert_eq!(stats.list_blocks, 1);
        assert_eq!(stats.quotable_paragraphs, 1);
    }

    #[test]
    fn test_collect_empty() {
        assert_eq!(PageStats::collect(&[], &Options::default()), PageStats::default());
    }
}
