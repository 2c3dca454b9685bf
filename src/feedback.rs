//! Feedback generation.
//!
//! Turns detected weaknesses into ordered, human-readable suggestions that
//! name the heading to fix. Output is deterministic and never empty.

use crate::classifier::{is_question_heading, PageType};
use crate::content_map::{BlockKind, Section};
use crate::options::Options;
use crate::patterns;
use crate::scoring::Score;

/// First exam-page message.
pub const EXAM_NOT_EXTRACTABLE: &str = "This page is designed to test users, not explain answers. \
AI answer engines do not use MCQ-style content.";

/// Second exam-page message.
pub const EXAM_ADD_EXPLANATIONS: &str = "To make this page AEO-ready, include a clear \u{2018}Explanation\u{2019} \
or \u{2018}Why this answer is correct\u{2019} section after each question.";

/// Message for pages that could not be analyzed.
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze this page. \
The content may be dynamically loaded, restricted, or blocked.";

/// Message for pages without any H1–H3 structure.
pub const NO_STRUCTURE: &str = "No headings were found in the main content. \
Organise the page under descriptive, question-style headings so answer engines can locate direct answers.";

/// Message when no structural issue was found.
pub const WELL_STRUCTURED: &str = "This page is well-structured for AI answers. \
The content is clear, segmented, and easy to extract.";

/// Coaching for scores below the first tier.
pub const COACH_WEAK: &str = "Answer coverage is weak: open each section with a 25\u{2013}60 word \
answer that directly addresses its heading.";

/// Coaching for scores below the second tier.
pub const COACH_MODERATE: &str = "Phrase more headings as the questions readers ask, \
and follow each with a concise answer paragraph.";

/// Coaching for scores below the third tier.
pub const COACH_MINOR: &str = "Good structure overall. A supporting list or a one-sentence \
definition in your strongest sections would lift the score further.";

/// Build the feedback list for an analyzed page.
///
/// `score` only matters for the coaching tiers, which apply when no
/// structural issue was found.
#[must_use]
pub fn generate_feedback(
    sections: &[Section],
    page_type: PageType,
    score: Score,
    options: &Options,
) -> Vec<String> {
    match page_type {
        PageType::ExamMcq => {
            return vec![
                EXAM_NOT_EXTRACTABLE.to_string(),
                EXAM_ADD_EXPLANATIONS.to_string(),
            ]
        }
        PageType::Error => return vec![UNABLE_TO_ANALYZE.to_string()],
        PageType::QuestionInformational | PageType::Informational => {}
    }

    let Some(first) = sections.first() else {
        return vec![NO_STRUCTURE.to_string()];
    };

    let mut feedback = Vec::new();

    let has_definition = sections
        .iter()
        .flat_map(|s| &s.blocks)
        .any(|b| patterns::any_match(&options.definition_patterns, &b.text));
    if !has_definition {
        feedback.push(missing_definition(&first.heading));
    }

    feedback.extend(
        sections
            .iter()
            .filter(|s| lacks_direct_answer(s, options))
            .take(options.max_direct_answer_hints)
            .map(|s| missing_direct_answer(&s.heading)),
    );

    let mut long_paragraph_headings: Vec<&str> = Vec::new();
    for section in sections {
        if long_paragraph_headings.len() >= options.max_long_paragraph_hints {
            break;
        }
        let has_long_paragraph = section.blocks.iter().any(|b| {
            b.kind == BlockKind::Paragraph && b.word_count() > options.long_paragraph_words
        });
        if has_long_paragraph && !long_paragraph_headings.contains(&section.heading.as_str()) {
            long_paragraph_headings.push(&section.heading);
        }
    }
    feedback.extend(long_paragraph_headings.into_iter().map(break_up_paragraph));

    if feedback.is_empty() {
        feedback.push(closing_message(score, options).to_string());
    }

    tracing::debug!(messages = feedback.len(), %page_type, "generated feedback");
    feedback
}

/// Question section whose answer block runs too long to be lifted.
fn lacks_direct_answer(section: &Section, options: &Options) -> bool {
    is_question_heading(&section.heading, options)
        && section
            .first_block()
            .is_some_and(|b| b.word_count() > options.direct_answer_max_words)
}

/// Positive message, or a coaching tier when the score is middling.
fn closing_message(score: Score, options: &Options) -> &'static str {
    let Some(points) = score.points().filter(|_| options.score_coaching) else {
        return WELL_STRUCTURED;
    };

    let [weak, moderate, minor] = options.coaching_thresholds;
    if points < weak {
        COACH_WEAK
    } else if points < moderate {
        COACH_MODERATE
    } else if points < minor {
        COACH_MINOR
    } else {
        WELL_STRUCTURED
    }
}

fn missing_definition(heading: &str) -> String {
    format!(
        "Add a clear definition immediately under the heading \u{201c}{heading}\u{201d} \
using 1\u{2013}2 concise sentences."
    )
}

fn missing_direct_answer(heading: &str) -> String {
    format!(
        "Under the heading \u{201c}{heading}\u{201d}, add a short direct answer \
(30\u{2013}40 words) before going into details."
    )
}

fn break_up_paragraph(heading: &str) -> String {
    format!(
        "Break the long paragraph under \u{201c}{heading}\u{201d} into shorter, \
answer-focused blocks to improve AI extractability."
    )
}
