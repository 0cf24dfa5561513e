//! Error taxonomy shared by the mutation operators and quality indicators.
//!
//! Every failure is raised at the point of violation and returned to the
//! caller unchanged. None of these errors is transient: each one signals a
//! caller bug (bad configuration or malformed input), so there is no retry
//! path anywhere in the crate.

use thiserror::Error;

/// Errors raised by operators and indicators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MooError {
    /// Malformed configuration or input: probability outside `[0, 1]`,
    /// a missing or malformed reference front, non-finite coordinates.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required argument was absent.
    #[error("required argument is absent: {0}")]
    NullArgument(&'static str),

    /// An objective vector does not match the reference dimensionality.
    #[error("dimension mismatch: expected {expected} objectives, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the reference front.
        expected: usize,
        /// Dimensionality of the offending vector.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MooError>;
