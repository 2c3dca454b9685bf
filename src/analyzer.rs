//! Analysis pipeline orchestration.
//!
//! Extractor → Mapper → Classifier → Scorer and Feedback Generator. The
//! fallible pipeline returns [`Result`]; [`analyze_document`] is the total
//! boundary that turns every failure, panics included, into
//! [`AnalysisResult::unable_to_analyze`].

use std::panic::{self, AssertUnwindSafe};

use dom_query::Document;

use crate::classifier::classify_page;
use crate::content_map::build_content_map;
use crate::error::{Error, Result};
use crate::extractor::{content_root, extract_main_content};
use crate::feedback::generate_feedback;
use crate::options::Options;
use crate::result::AnalysisResult;
use crate::scoring::score_page;
use crate::stats::PageStats;

/// Run the full pipeline on a parsed document.
///
/// The document itself is never modified; extraction works on a clone.
pub fn run_pipeline(document: &Document, options: &Options) -> Result<AnalysisResult> {
    let cleaned = extract_main_content(document, options)?;
    let sections = build_content_map(&content_root(&cleaned), options);
    let intent = classify_page(&sections, options);
    let score = score_page(&sections, intent, options);
    let feedback = generate_feedback(&sections, intent, score, options);
    let stats = PageStats::collect(&sections, options);

    Ok(AnalysisResult {
        score,
        intent,
        feedback,
        sections,
        stats,
    })
}

/// Run the pipeline, converting panics into [`Error::Internal`].
pub fn try_analyze_document(document: &Document, options: &Options) -> Result<AnalysisResult> {
    panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(document, options)))
        .unwrap_or_else(|payload| Err(Error::Internal(panic_message(payload.as_ref()))))
}

/// Analyze a parsed document. Never fails.
#[must_use]
pub fn analyze_document(document: &Document, options: &Options) -> AnalysisResult {
    match try_analyze_document(document, options) {
        Ok(result) => {
            tracing::debug!(
                score = %result.score,
                intent = %result.intent,
                sections = result.sections.len(),
                "analysis complete"
            );
            result
        }
        Err(err) => {
            tracing::warn!(error = %err, "analysis failed, returning degraded result");
            AnalysisResult::unable_to_analyze()
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "pipeline stage panicked".to_string())
}
