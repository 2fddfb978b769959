//! Elementary row operations as values.
//!
//! The eliminator describes each step as a [`RowOperation`] before applying
//! it, so the same value can be applied, recorded and narrated.

use std::fmt;

use gauss_integers::Rational;

/// One elementary row operation. Row indices are zero-based; the narration
/// printed by `Display` uses one-based `Row_k` labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOperation {
    /// Exchange two rows.
    Swap {
        /// First row.
        first: usize,
        /// Second row.
        second: usize,
    },
    /// Multiply every cell of a row by `factor`.
    Scale {
        /// Row to scale.
        row: usize,
        /// Multiplier.
        factor: Rational,
    },
    /// `row[target] += factor * row[source]`.
    AddScaled {
        /// Row that changes.
        target: usize,
        /// Row that is added, unchanged.
        source: usize,
        /// Multiplier applied to the source row.
        factor: Rational,
    },
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { first, second } => {
                write!(f, "Row_{} <-> Row_{}", first + 1, second + 1)
            }
            Self::Scale { row, factor } => {
                write!(f, "Row_{0} = {factor} * Row_{0}", row + 1)
            }
            Self::AddScaled {
                target,
                source,
                factor,
            } => {
                let sign = if factor.is_negative() { '-' } else { '+' };
                write!(
                    f,
                    "Row_{0} = Row_{0} {sign} {1} * Row_{2}",
                    target + 1,
                    factor.abs(),
                    source + 1
                )
            }
        }
    }
}
