use crate::location::CodeSection;
use thiserror::Error;

/// Errors raised by [`crate::extractor::CoverageExtractor`].
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("decision at {section} has {count} atomic conditions, exceeding the 64-condition limit")]
    TooManyConditions { section: CodeSection, count: usize },

    #[error("construct at {section} requires a body but none was found")]
    MissingBody { section: CodeSection },

    #[error("jump at {section} leaves an evaluation in progress, which would violate body containment")]
    UnsupportedJump { section: CodeSection },

    #[error("coverage store invariant violated: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by [`crate::store::CidStore`] when an `add_*` call violates
/// the enabled/disabled marker-class contract (§4.2: disabled marker classes
/// reject `add_*` calls rather than silently accepting or dropping them).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("checkpoint markers are disabled for this translation unit")]
    CheckpointMarkersDisabled,

    #[error("evaluation markers are disabled for this translation unit")]
    EvaluationMarkersDisabled,
}

/// Top-level error type returned by the driver for one translation unit.
#[derive(Debug, Error)]
pub enum CoveronError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("extraction failed: {0}")]
    Extractor(#[from] ExtractorError),

    #[error("coverage store invariant violated: {0}")]
    Store(#[from] StoreError),

    #[error("failed to serialize CID: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("AST provider failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("downstream compiler exited with status {code}")]
    CompilerFailed { code: i32 },
}
