//! Errors raised by exact rational construction and arithmetic.

use thiserror::Error;

/// Errors that can occur while building or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// Malformed constructor input: a zero denominator, an unparsable
    /// fraction string, a non-finite float, or a denominator supplied
    /// alongside a non-integer value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division by a rational whose numerator is zero.
    #[error("division by zero")]
    DivisionByZero,
}
