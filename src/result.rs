//! Result types for analysis output.
//!
//! [`AnalysisResult`] is the single record handed to whatever renders the
//! analysis (a popup, a report, the CLI's JSON).

use serde::Serialize;

use crate::classifier::PageType;
use crate::content_map::Section;
use crate::feedback::UNABLE_TO_ANALYZE;
use crate::scoring::Score;
use crate::stats::PageStats;

/// Renderer colour band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 75 and above.
    Good,
    /// 50 to 74.
    Medium,
    /// Below 50.
    Poor,
    /// Exam and error pages.
    NotApplicable,
}

impl ScoreBand {
    /// Lowest score in the `Good` band.
    pub const GOOD_THRESHOLD: u8 = 75;
    /// Lowest score in the `Medium` band.
    pub const MEDIUM_THRESHOLD: u8 = 50;
}

/// Result of analyzing one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Suitability score, or `"N/A"` for exam pages.
    pub score: Score,

    /// Detected page intent.
    pub intent: PageType,

    /// Improvement suggestions, most important first. Never empty.
    pub feedback: Vec<String>,

    /// Content map the score was computed from.
    pub sections: Vec<Section>,

    /// Descriptive counters.
    pub stats: PageStats,
}

impl AnalysisResult {
    /// The degraded result returned when a page cannot be analyzed.
    #[must_use]
    pub fn unable_to_analyze() -> Self {
        Self {
            score: Score::Points(0),
            intent: PageType::Error,
            feedback: vec![UNABLE_TO_ANALYZE.to_string()],
            sections: Vec::new(),
            stats: PageStats::default(),
        }
    }

    /// True if this is the degraded error result.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.intent == PageType::Error
    }

    /// Colour band a renderer should use for the score badge.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        if !self.intent.is_scorable() {
            return ScoreBand::NotApplicable;
        }
        match self.score {
            Score::Points(p) if p >= ScoreBand::GOOD_THRESHOLD => ScoreBand::Good,
            Score::Points(p) if p >= ScoreBand::MEDIUM_THRESHOLD => ScoreBand::Medium,
            Score::Points(_) => ScoreBand::Poor,
            Score::NotApplicable => ScoreBand::NotApplicable,
        }
    }
}
