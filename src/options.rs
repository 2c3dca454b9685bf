//! Configuration options for page analysis.
//!
//! The `Options` struct carries every tunable of the pipeline: which parts of
//! the page are discarded, which tags count as section boundaries, how strict
//! exam detection is, the scoring weights and pattern tables, and the
//! feedback thresholds. The defaults are the reference heuristics.

use std::ops::RangeInclusive;

use crate::patterns::{default_definition_patterns, default_question_patterns, WeightedPattern};

/// Selectors removed from the cloned content root before mapping.
pub const DEFAULT_DISCARD_SELECTORS: &[&str] = &[
    "nav",
    "footer",
    "aside",
    "script",
    "style",
    "noscript",
    "template",
    "iframe",
    "menu",
    "[hidden]",
    "[aria-hidden='true']",
    "[role='navigation']",
    ".ads",
    ".ad",
    ".advertisement",
    ".sidebar",
    ".menu",
    ".popup",
    ".modal",
    ".comments",
    ".related",
    ".cookie-banner",
];

/// How aggressively question sections with short option lines are read as
/// multiple-choice exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum McqStrictness {
    /// A question heading must be followed by a cluster of short,
    /// similar-length option lines.
    #[default]
    Strict,
    /// A handful of option-marker lines anywhere plus any question heading.
    Loose,
}

/// Which blocks of a section are tested for definitional wording when
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionScope {
    /// Only the answer block (the section's first block).
    #[default]
    FirstBlock,
    /// Any block of the section.
    AnyBlock,
}

/// Point values and word-count bands used by the scorer.
///
/// Question and definition bonuses are carried by the pattern tables in
/// [`Options`]; everything else lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Answer-block word count earning the full length bonus.
    ///
    /// Default: `25..=60`
    pub ideal_answer_words: RangeInclusive<usize>,

    /// Bonus for an ideal-length answer block.
    ///
    /// Default: `40`
    pub ideal_answer_bonus: i32,

    /// Slightly short answer blocks earning the partial bonus.
    ///
    /// Default: `15..=24`
    pub short_answer_words: RangeInclusive<usize>,

    /// Slightly long answer blocks earning the partial bonus.
    ///
    /// Default: `61..=90`
    pub extended_answer_words: RangeInclusive<usize>,

    /// Bonus for a short or extended answer block.
    ///
    /// Default: `20`
    pub partial_answer_bonus: i32,

    /// Answer blocks above this word count are penalised.
    ///
    /// Default: `120`
    pub penalty_above_words: usize,

    /// Points subtracted for an overlong answer block.
    ///
    /// Default: `15`
    pub long_answer_penalty: i32,

    /// Bonus for a section containing a list.
    ///
    /// Default: `10`
    pub list_bonus: i32,

    /// Ceiling for any single section, so one section cannot saturate the
    /// scale.
    ///
    /// Default: `80`
    pub section_cap: i32,

    /// Number of best sections averaged into the page score.
    ///
    /// Default: `2`
    pub top_sections: usize,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ideal_answer_words: 25..=60,
            ideal_answer_bonus: 40,
            short_answer_words: 15..=24,
            extended_answer_words: 61..=90,
            partial_answer_bonus: 20,
            penalty_above_words: 120,
            long_answer_penalty: 15,
            list_bonus: 10,
            section_cap: 80,
            top_sections: 2,
        }
    }
}

/// Configuration options for page analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the reference heuristics.
///
/// # Example
///
/// ```rust
/// use aeo_analyzer::{McqStrictness, Options};
///
/// let options = Options {
///     mcq_strictness: McqStrictness::Loose,
///     include_list_items: true,
///     ..Options::default()
/// };
/// assert_eq!(options.heading_levels, 1..=3);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Selector for the content root that is cloned and analyzed.
    ///
    /// Default: `"body"`
    pub root_selector: String,

    /// Selectors removed from the cloned root before mapping.
    ///
    /// Default: [`DEFAULT_DISCARD_SELECTORS`]
    pub discard_selectors: Vec<String>,

    /// Heading levels that start a new section.
    ///
    /// Default: `1..=3`
    pub heading_levels: RangeInclusive<u8>,

    /// Record each `<li>` as its own block in addition to its list.
    ///
    /// Default: `false`
    pub include_list_items: bool,

    /// Skip headings whose visible text is empty.
    ///
    /// Default: `true`
    pub skip_empty_headings: bool,

    /// Exam detection variant.
    ///
    /// Default: [`McqStrictness::Strict`]
    pub mcq_strictness: McqStrictness,

    /// Option lines must be shorter than this many characters.
    ///
    /// Default: `80`
    pub max_option_chars: usize,

    /// Length spread (characters) below which option lines count as
    /// similar.
    ///
    /// Default: `25`
    pub max_option_spread: usize,

    /// Similar option lines needed under one question heading (strict).
    ///
    /// Default: `3`
    pub min_cluster_options: usize,

    /// Option-marker lines needed across the page (loose).
    ///
    /// Default: `2`
    pub loose_min_option_lines: usize,

    /// Question heading pattern table.
    ///
    /// Default: [`crate::patterns::default_question_patterns`]
    pub question_patterns: Vec<WeightedPattern>,

    /// Definitional wording pattern table.
    ///
    /// Default: [`crate::patterns::default_definition_patterns`]
    pub definition_patterns: Vec<WeightedPattern>,

    /// Blocks tested for definitional wording during scoring.
    ///
    /// Default: [`DefinitionScope::FirstBlock`]
    pub definition_scope: DefinitionScope,

    /// Scoring magnitudes.
    pub weights: ScoreWeights,

    /// A question section's first block above this word count lacks a
    /// direct answer.
    ///
    /// Default: `70`
    pub direct_answer_max_words: usize,

    /// Maximum "add a direct answer" messages.
    ///
    /// Default: `3`
    pub max_direct_answer_hints: usize,

    /// Paragraphs above this word count should be split.
    ///
    /// Default: `90`
    pub long_paragraph_words: usize,

    /// Maximum "break up this paragraph" messages.
    ///
    /// Default: `2`
    pub max_long_paragraph_hints: usize,

    /// Emit tiered coaching instead of the positive message when no
    /// structural issue was found but the score is middling.
    ///
    /// Default: `true`
    pub score_coaching: bool,

    /// Ascending score thresholds for the coaching tiers. A score at or
    /// above the last threshold gets the positive message.
    ///
    /// The top tier sits at 75 rather than 85: with the default section cap
    /// of 80 no page can reach 85, so a top-scoring page would always be
    /// coached. Raise it together with `ScoreWeights::section_cap`.
    ///
    /// Default: `[40, 60, 75]`
    pub coaching_thresholds: [u8; 3],
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_selector: "body".to_string(),
            discard_selectors: DEFAULT_DISCARD_SELECTORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            heading_levels: 1..=3,
            include_list_items: false,
            skip_empty_headings: true,
            mcq_strictness: McqStrictness::Strict,
            max_option_chars: 80,
            max_option_spread: 25,
            min_cluster_options: 3,
            loose_min_option_lines: 2,
            question_patterns: default_question_patterns(),
            definition_patterns: default_definition_patterns(),
            definition_scope: DefinitionScope::FirstBlock,
            weights: ScoreWeights::default(),
            direct_answer_max_words: 70,
            max_direct_answer_hints: 3,
            long_paragraph_words: 90,
            max_long_paragraph_hints: 2,
            score_coaching: true,
            coaching_thresholds: [40, 60, 75],
        }
    }
}

impl Options {
    /// True if `tag` (lowercase, e.g. `"h2"`) is a section boundary.
    #[must_use]
    pub fn is_heading_tag(&self, tag: &str) -> bool {
        heading_level(tag).is_some_and(|level| self.heading_levels.contains(&level))
    }
}

/// Level of an `h1`..`h6` tag name.
fn heading_level(tag: &str) -> Option<u8> {
    match tag.as_bytes() {
        [b'h', d @ b'1'..=b'6'] => Some(d - b'0'),
        _ => None,
    }
}
