//! Gauss-Jordan elimination over exact rationals.
//!
//! Solving runs in three phases:
//!
//! 1. **Forward elimination**: for each variable column, find the first
//!    usable row, swap it up, scale the pivot to exactly 1 and clear every
//!    entry below it. A column without a usable row is free.
//! 2. **Back substitution**: walk rows bottom-up. A row reading `0 = c` with
//!    `c != 0` ends the run with a contradiction; otherwise entries above each
//!    pivot are cleared, leaving reduced row-echelon form.
//! 3. **Solution derivation**: free columns become parameters `t_1, t_2, ...`
//!    (highest column first), pivot columns are expressed through them.
//!
//! Every operation goes through [`AugmentedMatrix::apply`] and is reported to
//! a [`TraceSink`].

use gauss_integers::Rational;
use num_traits::{One, Zero};

use crate::solution::{Expression, Parameter, Solution, SolveOutcome};
use crate::trace::{NoTrace, Phase, TraceSink, TraceStep};
use crate::{AugmentedMatrix, LinalgError, RowOperation};

/// Configuration for the eliminator.
#[derive(Clone, Debug)]
pub struct EliminatorConfig {
    /// Prefix for free parameter names; `t` yields `t_1, t_2, ...`.
    pub parameter_prefix: String,
}

impl Default for EliminatorConfig {
    fn default() -> Self {
        Self {
            parameter_prefix: "t".to_string(),
        }
    }
}

/// Solves augmented systems by Gauss-Jordan elimination.
///
/// Holds no state between calls; every call owns the matrix it works on.
#[derive(Clone, Debug, Default)]
pub struct Eliminator {
    config: EliminatorConfig,
}

impl Eliminator {
    /// Creates an eliminator with the given configuration.
    #[must_use]
    pub fn new(config: EliminatorConfig) -> Self {
        Self { config }
    }

    /// Solves a copy of `matrix`, leaving the original untouched.
    ///
    /// # Errors
    ///
    /// Propagates [`LinalgError::Arithmetic`] if a pivot cannot be inverted.
    pub fn solve(&self, matrix: &AugmentedMatrix) -> Result<SolveOutcome, LinalgError> {
        self.solve_traced(matrix, &mut NoTrace)
    }

    /// Solves a copy of `matrix`, reporting every step to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates [`LinalgError::Arithmetic`] if a pivot cannot be inverted.
    pub fn solve_traced<S: TraceSink + ?Sized>(
        &self,
        matrix: &AugmentedMatrix,
        sink: &mut S,
    ) -> Result<SolveOutcome, LinalgError> {
        let mut work = matrix.clone();
        self.solve_in_place(&mut work, sink)
    }

    /// Reduces `matrix` in place and derives its solution set.
    ///
    /// On a contradiction the matrix is left as it was when the contradictory
    /// row was found.
    ///
    /// # Errors
    ///
    /// Propagates [`LinalgError::Arithmetic`] if a pivot cannot be inverted.
    pub fn solve_in_place<S: TraceSink + ?Sized>(
        &self,
        matrix: &mut AugmentedMatrix,
        sink: &mut S,
    ) -> Result<SolveOutcome, LinalgError> {
        log::debug!(
            "eliminating {}x{} system",
            matrix.num_rows(),
            matrix.num_variables()
        );

        let pivots = forward_eliminate(matrix, sink)?;
        log::debug!(
            "forward elimination done, rank {}",
            pivots.iter().flatten().count()
        );

        if let Some(row) = back_substitute(matrix, &pivots, sink)? {
            log::debug!("row {} is contradictory", row + 1);
            sink.contradiction(row, matrix);
            return Ok(SolveOutcome::Contradiction { row });
        }

        let solution = self.derive_solution(matrix, &pivots);
        log::debug!("solution: {solution}");
        Ok(SolveOutcome::Solved(solution))
    }

    fn derive_solution(&self, matrix: &AugmentedMatrix, pivots: &[Option<usize>]) -> Solution {
        let num_variables = matrix.num_variables();
        let mut values: Vec<Option<Expression>> = vec![None; num_variables];
        let mut parameters = Vec::new();

        for col in (0..num_variables).rev() {
            let expression = match pivots[col] {
                None => {
                    let parameter = Parameter::new(
                        parameters.len(),
                        format!("{}_{}", self.config.parameter_prefix, parameters.len() + 1),
                    );
                    parameters.push(parameter.clone());
                    Expression::parameter(parameter)
                }
                Some(row) => {
                    // x_col = rhs - Σ m[row][j] * x_j over later columns
                    let mut expression = Expression::constant(matrix.rhs(row).clone());
                    for later in col + 1..num_variables {
                        let coefficient = &matrix[(row, later)];
                        if coefficient.is_zero() {
                            continue;
                        }
                        if let Some(value) = &values[later] {
                            expression.sub_scaled(coefficient, value);
                        }
                    }
                    expression
                }
            };
            values[col] = Some(expression);
        }

        Solution::new(values.into_iter().flatten().collect(), parameters)
    }
}

fn apply<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    sink: &mut S,
    phase: Phase,
    operation: RowOperation,
) -> Result<(), LinalgError> {
    matrix.apply(&operation)?;
    sink.record(&TraceStep {
        phase,
        operation: &operation,
        matrix,
    });
    Ok(())
}

/// Brings the matrix to row-echelon form with unit pivots.
///
/// Returns the pivot row of every variable column, `None` for free columns.
fn forward_eliminate<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    sink: &mut S,
) -> Result<Vec<Option<usize>>, LinalgError> {
    let num_rows = matrix.num_rows();
    let mut pivots = vec![None; matrix.num_variables()];
    let mut pivot_row = 0;

    for (col, pivot) in pivots.iter_mut().enumerate() {
        if pivot_row == num_rows {
            break;
        }

        // Find pivot (first non-zero at or below the pivot row)
        let Some(found) = (pivot_row..num_rows).find(|&row| !matrix[(row, col)].is_zero()) else {
            continue;
        };

        if found != pivot_row {
            apply(
                matrix,
                sink,
                Phase::ForwardElimination,
                RowOperation::Swap {
                    first: pivot_row,
                    second: found,
                },
            )?;
        }

        let value = &matrix[(pivot_row, col)];
        if !value.is_one() {
            let factor = value.recip()?;
            apply(
                matrix,
                sink,
                Phase::ForwardElimination,
                RowOperation::Scale {
                    row: pivot_row,
                    factor,
                },
            )?;
        }

        // Eliminate entries below pivot
        for row in pivot_row + 1..num_rows {
            let entry = &matrix[(row, col)];
            if entry.is_zero() {
                continue;
            }
            let factor: Rational = -entry;
            apply(
                matrix,
                sink,
                Phase::ForwardElimination,
                RowOperation::AddScaled {
                    target: row,
                    source: pivot_row,
                    factor,
                },
            )?;
        }

        *pivot = Some(pivot_row);
        pivot_row += 1;
    }

    Ok(pivots)
}

/// Clears entries above every pivot, bottom row first.
///
/// Returns the first contradictory row met on the way up, if any.
fn back_substitute<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    pivots: &[Option<usize>],
    sink: &mut S,
) -> Result<Option<usize>, LinalgError> {
    let mut pivot_cols = vec![None; matrix.num_rows()];
    for (col, row) in pivots.iter().enumerate() {
        if let Some(row) = row {
            pivot_cols[*row] = Some(col);
        }
    }

    for row in (0..matrix.num_rows()).rev() {
        let Some(col) = pivot_cols[row] else {
            // Rows without a pivot are all zero left of the bar.
            debug_assert!(matrix.has_zero_coefficients(row));
            if !matrix.rhs(row).is_zero() {
                return Ok(Some(row));
            }
            continue;
        };

        for above in 0..row {
            let entry = &matrix[(above, col)];
            if entry.is_zero() {
                continue;
            }
            let factor: Rational = -entry;
            apply(
                matrix,
                sink,
                Phase::BackSubstitution,
                RowOperation::AddScaled {
                    target: above,
                    source: row,
                    factor,
                },
            )?;
        }
    }

    Ok(None)
}
