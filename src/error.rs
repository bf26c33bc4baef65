// Errors raised by a single analysis call.
//
// Every failure is local to the call that produced it. Nothing here is
// retryable: the pipeline is pure, so replaying the same input fails the
// same way.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The caller passed blank or whitespace-only text.
    #[error("input text is empty")]
    EmptyInput,

    /// The input exceeds the configured size cap.
    #[error("input is {len} bytes, larger than the {max}-byte limit")]
    InputTooLarge { len: usize, max: usize },

    /// An internal consistency check failed. Never corrected silently.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
