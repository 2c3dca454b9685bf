//! AEO suitability scoring.
//!
//! Each section is scored on its own (question heading, answer-block
//! length, definitional wording, list support), capped, and the page score
//! is the rounded average of the best few sections. Answer engines lift one
//! or two passages per page, so padding a page with shallow sections must
//! not raise its score.
//!
//! # Examples
//!
//! ```
//! use aeo_analyzer::scoring::aggregate;
//!
//! // Best-of-2: the weak third section does not drag the page down.
//! assert_eq!(aggregate(&[80, 10, 80], 2), 80);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::classifier::PageType;
use crate::content_map::Section;
use crate::options::{DefinitionScope, Options, ScoreWeights};
use crate::patterns::best_weight;

/// Page score: points out of 100, or not applicable for exam pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Suitability in `0..=100`.
    Points(u8),
    /// Exam/MCQ pages are not scorable.
    NotApplicable,
}

impl Score {
    /// Serialized form of [`Score::NotApplicable`].
    pub const NOT_APPLICABLE: &'static str = "N/A";

    /// Numeric value, if any.
    #[must_use]
    pub fn points(self) -> Option<u8> {
        match self {
            Self::Points(p) => Some(p),
            Self::NotApplicable => None,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::Points(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(p) => write!(f, "{p}"),
            Self::NotApplicable => f.write_str(Self::NOT_APPLICABLE),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Points(p) => serializer.serialize_u8(*p),
            Self::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE),
        }
    }
}

/// Score a page.
///
/// Exam pages are never scored; error pages score 0. An informational page
/// without sections scores 0.
#[must_use]
pub fn score_page(sections: &[Section], page_type: PageType, options: &Options) -> Score {
    match page_type {
        PageType::ExamMcq => Score::NotApplicable,
        PageType::Error => Score::Points(0),
        PageType::QuestionInformational | PageType::Informational => {
            let per_section: Vec<u32> = sections
                .iter()
                .map(|s| section_score(s, options))
                .collect();
            let score = aggregate(&per_section, options.weights.top_sections);
            tracing::debug!(?per_section, score, "scored page");
            Score::Points(score)
        }
    }
}

/// Score one section in `0..=section_cap`.
#[must_use]
pub fn section_score(section: &Section, options: &Options) -> u32 {
    let weights = &options.weights;
    let mut score = best_weight(&options.question_patterns, &section.heading).unwrap_or(0);

    if let Some(answer) = section.first_block() {
        score += answer_length_adjustment(answer.word_count(), weights);
    }

    let definition = match options.definition_scope {
        DefinitionScope::FirstBlock => section
            .first_block()
            .and_then(|b| best_weight(&options.definition_patterns, &b.text)),
        DefinitionScope::AnyBlock => section
            .blocks
            .iter()
            .filter_map(|b| best_weight(&options.definition_patterns, &b.text))
            .max(),
    };
    score += definition.unwrap_or(0);

    if section.has_list() {
        score += weights.list_bonus;
    }

    u32::try_from(score.clamp(0, weights.section_cap.max(0))).unwrap_or(0)
}

/// Bonus or penalty for the answer block's word count.
#[must_use]
pub fn answer_length_adjustment(words: usize, weights: &ScoreWeights) -> i32 {
    if weights.ideal_answer_words.contains(&words) {
        weights.ideal_answer_bonus
    } else if weights.short_answer_words.contains(&words)
        || weights.extended_answer_words.contains(&words)
    {
        weights.partial_answer_bonus
    } else if words > weights.penalty_above_words {
        -weights.long_answer_penalty
    } else {
        0
    }
}

/// Average of the `top` highest section scores, rounded half up and
/// clamped to 100. No sections scores 0.
#[must_use]
pub fn aggregate(section_scores: &[u32], top: usize) -> u8 {
    let mut sorted = section_scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.truncate(top.max(1));

    if sorted.is_empty() {
        return 0;
    }

    let count = u64::try_from(sorted.len()).unwrap_or(u64::MAX);
    let sum = sorted
        .iter()
        .fold(0u64, |acc, &s| acc.saturating_add(u64::from(s)));
    let average = sum.saturating_mul(2).saturating_add(count) / count.saturating_mul(2);

    u8::try_from(average.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_map::BlockKind;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_question_answer_definition_list_caps_at_80() {
        let answer = format!("Answer engine optimization refers to {}", words(26));
        let section = Section::new("What is AEO?")
            .with_block(BlockKind::Paragraph, answer)
            .with_block(BlockKind::UnorderedList, "One\nTwo");

        // 20 + 40 + 15 + 10 = 85, capped
        assert_eq!(section_score(&section, &Options::default()), 80);
    }

    #[test]
    fn test_length_bands() {
        let w = ScoreWeights::default();
        assert_eq!(answer_length_adjustment(0, &w), 0);
        assert_eq!(answer_length_adjustment(14, &w), 0);
        assert_eq!(answer_length_adjustment(15, &w), 20);
        assert_eq!(answer_length_adjustment(24, &w), 20);
        assert_eq!(answer_length_adjustment(25, &w), 40);
        assert_eq!(answer_length_adjustment(60, &w), 40);
        assert_eq!(answer_length_adjustment(61, &w), 20);
        assert_eq!(answer_length_adjustment(90, &w), 20);
        assert_eq!(answer_length_adjustment(91, &w), 0);
        assert_eq!(answer_length_adjustment(120, &w), 0);
        assert_eq!(answer_length_adjustment(121, &w), -15);
    }

    #[test]
    fn test_long_answer_penalty_never_goes_negative() {
        let section = Section::new("Background").with_block(BlockKind::Paragraph, words(200));
        assert_eq!(section_score(&section, &Options::default()), 0);
    }

    #[test]
    fn test_long_answer_under_question_stays_low() {
        let section = Section::new("How does X work?").with_block(BlockKind::Paragraph, words(200));
        // 20 - 15
        assert_eq!(section_score(&section, &Options::default()), 5);
    }

    #[test]
    fn test_definition_scope() {
        let section = Section::new("Overview")
            .with_block(BlockKind::Paragraph, "Short intro.")
            .with_block(BlockKind::Paragraph, "Latency means waiting.");

        assert_eq!(section_score(&section, &Options::default()), 0);

        let any_block = Options {
            definition_scope: DefinitionScope::AnyBlock,
            ..Options::default()
        };
        assert_eq!(section_score(&section, &any_block), 15);
    }

    #[test]
    fn test_adding_definition_never_lowers_score() {
        let bare = Section::new("Caching").with_block(BlockKind::Paragraph, words(30));
        let defined = Section::new("Caching").with_block(
            BlockKind::Paragraph,
            format!("Caching is {}", words(28)),
        );
        let appended = bare
            .clone()
            .with_block(BlockKind::Paragraph, "A cache is a fast store.");

        let options = Options::default();
        let base = section_score(&bare, &options);
        assert!(section_score(&defined, &options) >= base);
        assert!(section_score(&appended, &options) >= base);
    }

    #[test]
    fn test_empty_section_scores_only_heading() {
        let options = Options::default();
        assert_eq!(section_score(&Section::new("Why now?"), &options), 20);
        assert_eq!(section_score(&Section::new("Notes"), &options), 0);
    }

    #[test]
    fn test_aggregate_best_of_two() {
        assert_eq!(aggregate(&[80, 80, 10], 2), 80);
        assert_eq!(aggregate(&[10, 80, 80], 2), 80);
        assert_eq!(aggregate(&[80, 45], 2), 63);
        assert_eq!(aggregate(&[70], 2), 70);
        assert_eq!(aggregate(&[], 2), 0);
        assert_eq!(aggregate(&[30, 20, 10], 0), 30);
    }

    #[test]
    fn test_aggregate_clamps_to_100() {
        assert_eq!(aggregate(&[250, 150], 2), 100);
    }

    #[test]
    fn test_score_page_by_type() {
        let sections = vec![Section::new("Question 1?")
            .with_block(BlockKind::Paragraph, "A) x")
            .with_block(BlockKind::Paragraph, "B) y")];
        let options = Options::default();

        assert_eq!(
            score_page(&sections, PageType::ExamMcq, &options),
            Score::NotApplicable
        );
        assert_eq!(score_page(&sections, PageType::Error, &options), Score::Points(0));
        assert_eq!(score_page(&[], PageType::Informational, &options), Score::Points(0));
    }

    #[test]
    fn test_custom_weights() {
        let options = Options {
            weights: ScoreWeights {
                list_bonus: 30,
                section_cap: 100,
                ..ScoreWeights::default()
            },
            ..Options::default()
        };
        let section = Section::new("Tools").with_block(BlockKind::UnorderedList, "a\nb");
        assert_eq!(section_score(&section, &options), 30);
    }

    #[test]
    fn test_aggregate_saturates_on_huge_scores() {
        assert_eq!(aggregate(&[u32::MAX, 1], 2), 100);
        assert_eq!(aggregate(&[u32::MAX, u32::MAX, u32::MAX], 3), 100);
    }

    #[test]
    fn test_score_serialization() {
        assert_eq!(serde_json::to_string(&Score::Points(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Score::NotApplicable).unwrap(), "\"N/A\"");
        assert_eq!(Score::NotApplicable.to_string(), "N/A");
        assert_eq!(Score::Points(7).points(), Some(7));
        assert_eq!(Score::NotApplicable.points(), None);
    }
}
