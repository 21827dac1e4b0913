//! Error types for unitnorm

use thiserror::Error;

/// All possible errors in unitnorm.
///
/// A zero-norm input is not an error: it is returned unchanged by
/// [`normalize`](crate::normalize).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormError {
    /// An input element could not be interpreted as a real number
    #[error("Non-numeric element at index {index}: {value}")]
    NonNumeric {
        /// Position of the offending element
        index: usize,
        /// Debug rendering of the offending element
        value: String,
    },
}

impl NormError {
    /// Short name of the error kind, as printed by the check harness.
    pub fn kind(&self) -> &'static str {
        match self {
            NormError::NonNumeric { .. } => "NonNumeric",
        }
    }
}
