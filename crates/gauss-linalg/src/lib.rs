//! # gauss-linalg
//!
//! Exact Gauss-Jordan elimination for augmented linear systems.
//!
//! This crate provides:
//! - [`AugmentedMatrix`], a validated `[A | b]` matrix of exact rationals
//! - [`RowOperation`], the three elementary row operations as values
//! - [`Eliminator`], which reduces a matrix and derives its solution set
//! - [`TraceSink`] implementations to observe every step
//!
//! ## Outcomes
//!
//! Solving always yields one of:
//! - a unique solution, e.g. `(2, 3, -1)`
//! - a parametrized family, e.g. `(3 - t_1, -2 + t_1, t_1)  t_1 ∈ ℝ`
//! - a contradiction, naming the row that reads `0 = c` with `c != 0`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod augmented_matrix;
pub mod eliminator;
pub mod row_operation;
pub mod solution;
pub mod trace;

mod error;

pub use augmented_matrix::AugmentedMatrix;
pub use eliminator::{Eliminator, EliminatorConfig};
pub use error::LinalgError;
pub use row_operation::RowOperation;
pub use solution::{Expression, Parameter, Solution, SolveOutcome};
pub use trace::{LogTrace, NoTrace, Phase, RecordedStep, TraceLog, TraceSink, TraceStep};

#[cfg(test)]
mod proptests;
