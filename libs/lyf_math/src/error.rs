//! Error types for pool math
//!
//! Every fallible operation in the crate returns [`LyfMathError`]. Variants carry
//! the operation name and the violated condition so a rejected call can be
//! traced back to the offending argument without re-running it.

use num_bigint::{BigInt, ParseBigIntError};
use thiserror::Error;

/// Failures of the pool math functions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LyfMathError {
    /// Square root requested for a negative number
    #[error("Negative input: cannot take the square root of {value}")]
    NegativeInput { value: BigInt },

    /// A precondition of the operation does not hold
    #[error("Invalid input for {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    /// A string argument is not a base-10 integer
    #[error("Unparseable amount {input:?}: {source}")]
    UnparseableAmount {
        input: String,
        #[source]
        source: ParseBigIntError,
    },

    /// The inner deposit solver was handed the deficit side as token A
    #[error("Reversed deposit orientation: amt_a * res_b < amt_b * res_a")]
    ReversedPrecondition,
}

pub type Result<T> = std::result::Result<T, LyfMathError>;

impl LyfMathError {
    pub fn invalid_input(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }

    pub fn negative_input(value: BigInt) -> Self {
        Self::NegativeInput { value }
    }

    /// True for every variant a caller should treat as bad arguments
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnparseableAmount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = LyfMathError::invalid_input("swap_return", "reserve_in must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid input for swap_return: reserve_in must be positive, got 0"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_negative_input_display() {
        let err = LyfMathError::negative_input(BigInt::from(-4));
        assert!(err.to_string().contains("-4"));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_unparseable_counts_as_invalid_input() {
        let source = "12x".parse::<BigInt>().unwrap_err();
        let err = LyfMathError::UnparseableAmount {
            input: "12x".to_string(),
            source,
        };
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("\"12x\""));
    }
}
