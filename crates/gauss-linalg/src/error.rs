//! Errors raised while building or reducing augmented matrices.

use gauss_integers::RationalError;
use thiserror::Error;

/// Errors that can occur in matrix construction, row operations and
/// elimination.
///
/// An inconsistent system is not an error: it is reported as
/// [`SolveOutcome::Contradiction`](crate::SolveOutcome::Contradiction).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Malformed input: an empty or ragged matrix, a row index out of
    /// bounds, or a parameter assignment of the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A cell could not be converted, or a division hit a zero.
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
}
