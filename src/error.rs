//! Error types for aeo-analyzer.
//!
//! These errors never cross the public `analyze*` boundary; they are
//! converted into the degraded "unable to analyze" result there. They are
//! exposed for callers of [`crate::try_analyze`] who want the cause.

/// Error type for analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The configured content root selector matched nothing.
    #[error("Content root not found: {0}")]
    MissingRoot(String),

    /// A configured CSS selector could not be parsed.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A pipeline stage failed unexpectedly.
    #[error("Analysis failed: {0}")]
    Internal(String),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
