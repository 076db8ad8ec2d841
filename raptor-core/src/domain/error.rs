//! Domain error types.
//!
//! These errors represent validation failures of domain values. They are
//! distinct from request-validation and timetable-loading errors.

use super::TimeError;

/// Domain-level errors for value validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A time string could not be parsed
    #[error(transparent)]
    InvalidTime(#[from] TimeError),

    /// A leg duration was negative
    #[error("duration must not be negative: {0}s")]
    NegativeDuration(i32),

    /// A generalized cost was negative
    #[error("cost must not be negative: {0}")]
    NegativeCost(i32),

    /// Relax function would tighten instead of widen
    #[error("invalid relax function: ratio {ratio} must be >= 1.0 and slack {slack} >= 0")]
    InvalidRelaxFunction { ratio: f64, slack: i32 },
}
