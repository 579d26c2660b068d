//! Error type for fact and record generation.

use thiserror::Error;

/// Errors raised while sampling values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The lower bound of a sampling range is above its upper bound.
    #[error("Invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: String, upper: String },

    /// A categorical pick was requested from an empty set.
    #[error("Cannot pick from an empty set of choices")]
    EmptyChoice,
}

impl GeneratorError {
    pub(crate) fn invalid_range<T: std::fmt::Display>(lower: T, upper: T) -> Self {
        Self::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }
}
