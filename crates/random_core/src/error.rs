//! Error types for sampling operations.
//!
//! Every precondition is checked before the first draw, so a returned error
//! never leaves the generator in an advanced state.

use std::fmt::Display;
use thiserror::Error;

/// Errors raised by [`Generator`](crate::Generator) and the array utilities.
///
/// # Variants
///
/// - `InvalidArgument`: a parameter violates its precondition
///   (non-positive rate, probability outside its domain, empty collection,
///   mismatched weight length, negative weight)
/// - `Range`: a degenerate numeric range where `max <= min`
///
/// # Examples
///
/// ```
/// use random_core::SamplingError;
///
/// let err = SamplingError::range(10, 10);
/// assert!(err.to_string().contains("[10, 10)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// A parameter violates its precondition.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name as exposed to callers
        name: &'static str,
        /// Human readable description of the violation
        reason: String,
    },

    /// Degenerate half-open range `[min, max)`.
    #[error("Invalid range [{min}, {max}): max must be greater than min")]
    Range {
        /// Lower bound as supplied by the caller
        min: String,
        /// Upper bound as supplied by the caller
        max: String,
    },
}

impl SamplingError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a range error from any displayable bounds.
    pub fn range(min: impl Display, max: impl Display) -> Self {
        Self::Range {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Returns `true` for [`SamplingError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`SamplingError::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplingError>;
