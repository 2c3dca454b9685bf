//! Compiled regex patterns and pattern tables for the AEO heuristics.
//!
//! All patterns are compiled once using `LazyLock`. Patterns that feed the
//! scorer are exposed as `{pattern, weight}` tables so callers can tune or
//! replace the heuristics through [`crate::Options`] without touching
//! control flow.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Bonus awarded to a section whose heading reads as a question.
pub const QUESTION_BONUS: i32 = 20;

/// Bonus awarded to a section whose answer block reads as a definition.
pub const DEFINITION_BONUS: i32 = 15;

/// A regex paired with the score weight it contributes when it matches.
#[derive(Debug, Clone)]
pub struct WeightedPattern {
    /// Pattern tested against heading or block text.
    pub pattern: Regex,
    /// Points contributed on match.
    pub weight: i32,
}

impl WeightedPattern {
    /// Pair an already compiled pattern with a weight.
    #[must_use]
    pub fn new(pattern: Regex, weight: i32) -> Self {
        Self { pattern, weight }
    }

    /// Test the pattern against `text`.
    #[inline]
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Highest weight among the patterns matching `text`, or `None`.
///
/// Overlapping patterns (a heading that both starts with "what" and ends
/// with "?") count once.
#[must_use]
pub fn best_weight(table: &[WeightedPattern], text: &str) -> Option<i32> {
    table
        .iter()
        .filter(|p| p.is_match(text))
        .map(|p| p.weight)
        .max()
}

/// True if any pattern in the table matches `text`.
#[must_use]
pub fn any_match(table: &[WeightedPattern], text: &str) -> bool {
    table.iter().any(|p| p.is_match(text))
}

// =============================================================================
// Question Detection
// =============================================================================

/// Heading starts with a question word.
pub static QUESTION_LEXICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:what|why|how|when|who|which|can|does|is)\b")
        .expect("QUESTION_LEXICON regex")
});

/// Heading ends with a question mark.
pub static TRAILING_QUESTION_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?\s*$").expect("TRAILING_QUESTION_MARK regex"));

/// Default question pattern table.
#[must_use]
pub fn default_question_patterns() -> Vec<WeightedPattern> {
    vec![
        WeightedPattern::new(QUESTION_LEXICON.clone(), QUESTION_BONUS),
        WeightedPattern::new(TRAILING_QUESTION_MARK.clone(), QUESTION_BONUS),
    ]
}

// =============================================================================
// Definition Detection
// =============================================================================

/// "X is ..." copula.
pub static DEFINITION_IS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bis\b").expect("DEFINITION_IS regex"));

/// "X refers to ...".
pub static DEFINITION_REFERS_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brefers\s+to\b").expect("DEFINITION_REFERS_TO regex"));

/// "X means ...".
pub static DEFINITION_MEANS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmeans\b").expect("DEFINITION_MEANS regex"));

/// Default definition pattern table.
#[must_use]
pub fn default_definition_patterns() -> Vec<WeightedPattern> {
    vec![
        WeightedPattern::new(DEFINITION_IS.clone(), DEFINITION_BONUS),
        WeightedPattern::new(DEFINITION_REFERS_TO.clone(), DEFINITION_BONUS),
        WeightedPattern::new(DEFINITION_MEANS.clone(), DEFINITION_BONUS),
    ]
}

// =============================================================================
// Exam / MCQ Detection
// =============================================================================

/// Answer-choice marker at the start of a line: `A)`, `A.`, `(A)`, `1.`,
/// `1)` or `(1)`, followed by whitespace and the option text.
///
/// The trailing whitespace requirement keeps abbreviations like "e.g." from
/// being read as option `e`.
pub static OPTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\([A-Ha-h1-9]\)|[A-Ha-h][.)]|\d{1,2}[.)])\s+\S")
        .expect("OPTION_MARKER regex")
});

// =============================================================================
// Quotability
// =============================================================================

/// Wording that dates a passage or ties it to the author.
pub static TIME_SENSITIVE_OR_PERSONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:today|currently|i|we|our)\b").expect("TIME_SENSITIVE_OR_PERSONAL regex")
});

/// Sentence terminators.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_END regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
