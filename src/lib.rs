//! # aeo-analyzer
//!
//! Answer Engine Optimization (AEO) heuristics for web pages.
//!
//! This library estimates how readily an AI answer engine could lift a
//! direct answer from a page. It strips navigation and other boilerplate,
//! maps the remaining content into heading-keyed sections, classifies the
//! page's intent, computes a 0–100 suitability score and produces targeted
//! feedback.
//!
//! ## Quick Start
//!
//! ```rust
//! use aeo_analyzer::{analyze, PageType, Score};
//!
//! let html = r#"<html><body>
//!     <h2>Question 1?</h2>
//!     <p>A) 4</p><p>B) 5</p><p>C) 6</p>
//! </body></html>"#;
//!
//! let result = analyze(html);
//! assert_eq!(result.intent, PageType::ExamMcq);
//! assert_eq!(result.score, Score::NotApplicable);
//! assert_eq!(result.feedback.len(), 2);
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction**: clone the content root, drop nav/footer/ads/scripts
//! - **Mapping**: H1–H3 headings open sections; paragraphs and lists become blocks
//! - **Classification**: exam/MCQ, question-led informational, or informational
//! - **Scoring**: per-section heuristics, best-of-2 average
//! - **Feedback**: ordered, heading-specific suggestions; never empty
//!
//! The `analyze*` functions never fail: any internal fault yields the
//! "unable to analyze" result with intent [`PageType::Error`]. Use
//! [`try_analyze`] to see the underlying [`Error`].

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Compiled regex patterns and weighted pattern tables.
pub mod patterns;

/// Content root cloning and boilerplate pruning.
pub mod extractor;

/// Heading-keyed section mapping.
pub mod content_map;

/// Page intent classification.
pub mod classifier;

/// Per-section scoring and best-of-N aggregation.
pub mod scoring;

/// Feedback message generation.
pub mod feedback;

/// Lexical page counters.
pub mod stats;

/// Pipeline orchestration.
pub mod analyzer;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use analyzer::analyze_document;
pub use classifier::PageType;
pub use content_map::{Block, BlockKind, Section};
pub use error::{Error, Result};
pub use options::{DefinitionScope, McqStrictness, Options, ScoreWeights, DEFAULT_DISCARD_SELECTORS};
pub use patterns::WeightedPattern;
pub use result::{AnalysisResult, ScoreBand};
pub use scoring::Score;
pub use stats::PageStats;

/// Analyzes an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use aeo_analyzer::{analyze, PageType, Score};
///
/// let result = analyze("<html><body><p>No headings here.</p></body></html>");
/// assert_eq!(result.intent, PageType::Informational);
/// assert_eq!(result.score, Score::Points(0));
/// assert!(result.sections.is_empty());
/// assert!(!result.feedback.is_empty());
/// ```
#[must_use]
pub fn analyze(html: &str) -> AnalysisResult {
    analyze_with_options(html, &Options::default())
}

/// Analyzes an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use aeo_analyzer::{analyze_with_options, McqStrictness, Options, PageType};
///
/// let html = "<body><h2>Ready?</h2><p>A. yes</p><h2>Next</h2><p>B. no</p></body>";
/// let options = Options {
///     mcq_strictness: McqStrictness::Loose,
///     ..Options::default()
/// };
/// assert_eq!(analyze_with_options(html, &options).intent, PageType::ExamMcq);
/// ```
#[must_use]
pub fn analyze_with_options(html: &str, options: &Options) -> AnalysisResult {
    analyze_document(&dom::parse(html), options)
}

/// Analyzes HTML bytes, decoding them with the declared charset.
///
/// # Example
///
/// ```rust
/// use aeo_analyzer::analyze_bytes;
///
/// let html = b"<meta charset=\"windows-1252\"><body><h2>Caf\xE9 hours</h2><p>Open daily.</p></body>";
/// let result = analyze_bytes(html);
/// assert_eq!(result.sections[0].heading, "Café hours");
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8]) -> AnalysisResult {
    analyze_bytes_with_options(html, &Options::default())
}

/// Analyzes HTML bytes with custom options.
#[must_use]
pub fn analyze_bytes_with_options(html: &[u8], options: &Options) -> AnalysisResult {
    analyze_with_options(&encoding::decode_html(html), options)
}

/// Analyzes an HTML document, returning the failure instead of the
/// degraded result.
///
/// # Example
///
/// ```rust
/// use aeo_analyzer::{try_analyze, Error, Options};
///
/// let options = Options {
///     root_selector: "main".to_string(),
///     ..Options::default()
/// };
/// let err = try_analyze("<body><p>text</p></body>", &options).unwrap_err();
/// assert_eq!(err, Error::MissingRoot("main".to_string()));
/// ```
pub fn try_analyze(html: &str, options: &Options) -> Result<AnalysisResult> {
    analyzer::try_analyze_document(&dom::parse(html), options)
}
