//! Page intent classification.
//!
//! Decides whether a page is a multiple-choice exam, a question-led
//! informational page, or a plain informational page. Exam detection runs
//! first and always wins: a question heading followed by answer choices is
//! exam-shaped whatever else the page contains.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content_map::Section;
use crate::options::{McqStrictness, Options};
use crate::patterns::{self, OPTION_MARKER};

/// Page intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Multiple-choice / exam page; not scorable.
    ExamMcq,
    /// Informational page with question-style headings.
    QuestionInformational,
    /// Informational page.
    Informational,
    /// Analysis failed.
    Error,
}

impl PageType {
    /// Snake-case name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExamMcq => "exam_mcq",
            Self::QuestionInformational => "question_informational",
            Self::Informational => "informational",
            Self::Error => "error",
        }
    }

    /// Exam and error pages carry no numeric score.
    #[must_use]
    pub fn is_scorable(self) -> bool {
        matches!(self, Self::QuestionInformational | Self::Informational)
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a page from its sections.
#[must_use]
pub fn classify_page(sections: &[Section], options: &Options) -> PageType {
    let exam = match options.mcq_strictness {
        McqStrictness::Strict => sections.iter().any(|s| is_mcq_cluster(s, options)),
        McqStrictness::Loose => has_loose_mcq_signals(sections, options),
    };

    let page_type = if exam {
        PageType::ExamMcq
    } else if sections.iter().any(|s| is_question_heading(&s.heading, options)) {
        PageType::QuestionInformational
    } else {
        PageType::Informational
    };

    tracing::debug!(%page_type, strictness = ?options.mcq_strictness, "classified page");
    page_type
}

/// Heading matches the question pattern table.
#[must_use]
pub fn is_question_heading(heading: &str, options: &Options) -> bool {
    patterns::any_match(&options.question_patterns, heading)
}

/// Heading is phrased as a literal question.
fn ends_with_question_mark(heading: &str) -> bool {
    heading.trim_end().ends_with('?')
}

/// Short line opening with an answer-choice marker.
fn is_option_line(line: &str, options: &Options) -> bool {
    line.chars().count() < options.max_option_chars && OPTION_MARKER.is_match(line)
}

/// Distinct non-empty lines of every block in the section.
///
/// A list and the paragraphs or items nested in it carry the same lines, so
/// each line is counted once.
fn section_lines(section: &Section) -> BTreeSet<&str> {
    section
        .blocks
        .iter()
        .flat_map(|b| b.text.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Strict variant: a question heading followed by enough option lines of
/// similar length.
///
/// Similarity is the largest window of option lengths whose spread stays
/// under `max_option_spread`, so one odd option does not hide the cluster.
fn is_mcq_cluster(section: &Section, options: &Options) -> bool {
    if !ends_with_question_mark(&section.heading) {
        return false;
    }

    let mut lengths: Vec<usize> = section_lines(section)
        .into_iter()
        .filter(|l| is_option_line(l, options))
        .map(|l| l.chars().count())
        .collect();
    if lengths.len() < options.min_cluster_options {
        return false;
    }

    lengths.sort_unstable();
    let mut start = 0;
    let mut widest = 0;
    for (end, &len) in lengths.iter().enumerate() {
        while start < end && len - lengths[start] >= options.max_option_spread {
            start += 1;
        }
        widest = widest.max(end - start + 1);
    }

    widest >= options.min_cluster_options
}

/// Loose variant: option-marker lines anywhere plus a question heading.
fn has_loose_mcq_signals(sections: &[Section], options: &Options) -> bool {
    let question_headings = sections
        .iter()
        .filter(|s| ends_with_question_mark(&s.heading))
        .count();
    if question_headings == 0 {
        return false;
    }

    let option_lines = sections
        .iter()
        .flat_map(section_lines)
        .filter(|l| OPTION_MARKER.is_match(l))
        .count();

    option_lines >= options.loose_min_option_lines
}
