//! Content mapping: heading-keyed sections of typed blocks.
//!
//! Walks the cleaned tree in document order. Each eligible heading opens a
//! [`Section`]; paragraphs and lists that follow it become [`Block`]s of
//! that section until the next heading. Content before the first heading is
//! dropped.

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::options::Options;

/// Kind of element a block was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// `<p>`
    Paragraph,
    /// `<ul>`
    UnorderedList,
    /// `<ol>`
    OrderedList,
    /// `<li>` (only with `Options::include_list_items`)
    ListItem,
}

impl BlockKind {
    /// Block kind for a lowercase tag name, if the tag yields blocks.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(Self::Paragraph),
            "ul" => Some(Self::UnorderedList),
            "ol" => Some(Self::OrderedList),
            "li" => Some(Self::ListItem),
            _ => None,
        }
    }

    /// True for list containers (not individual items).
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Self::UnorderedList | Self::OrderedList)
    }
}

/// One paragraph, list, or list item's visible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Source element kind.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Trimmed visible text. List items are newline-separated.
    pub text: String,
}

impl Block {
    /// Create a block.
    #[must_use]
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whitespace-delimited word count.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A heading and the blocks that follow it, up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Trimmed heading text.
    pub heading: String,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a section with no blocks.
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    /// Builder-style block append, mostly for tests and callers assembling
    /// sections by hand.
    #[must_use]
    pub fn with_block(mut self, kind: BlockKind, text: impl Into<String>) -> Self {
        self.blocks.push(Block::new(kind, text));
        self
    }

    /// The answer block: the first block under the heading.
    #[must_use]
    pub fn first_block(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// True if the section contains a `ul` or `ol`.
    #[must_use]
    pub fn has_list(&self) -> bool {
        self.blocks.iter().any(|b| b.kind.is_list())
    }
}

/// Segment the cleaned content root into sections.
///
/// Headings in `Options::heading_levels` start sections; `p`, `ul`, `ol`
/// (and `li` with `Options::include_list_items`) with non-empty text become
/// blocks. Nested eligible elements each produce their own block.
#[must_use]
pub fn build_content_map(root: &Selection, options: &Options) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut dropped_preamble = 0usize;

    // Document order
    for node in root.select("*").nodes() {
        let el = Selection::from(*node);
        let Some(tag) = dom::tag_name(&el) else {
            continue;
        };

        if options.is_heading_tag(&tag) {
            let heading = dom::visible_text(&el);
            if heading.is_empty() && options.skip_empty_headings {
                continue;
            }
            sections.push(Section::new(heading));
            continue;
        }

        let Some(kind) = BlockKind::from_tag(&tag) else {
            continue;
        };
        if kind == BlockKind::ListItem && !options.include_list_items {
            continue;
        }

        let text = dom::visible_text(&el);
        if text.is_empty() {
            continue;
        }

        match sections.last_mut() {
            Some(current) => current.blocks.push(Block::new(kind, text)),
            None => dropped_preamble += 1,
        }
    }

    tracing::debug!(
        sections = sections.len(),
        dropped_preamble,
        "built content map"
    );

    sections
}
