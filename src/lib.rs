//! # Gauss
//!
//! Exact solving of linear systems by Gauss-Jordan elimination.
//!
//! Every entry is an exact rational, so the reduced matrix, the narrated
//! steps and the final answer carry no rounding error.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integers and normalized rationals
//! - **Augmented Matrices**: validated `[A | b]` with elementary row operations
//! - **Full Solution Sets**: unique, parametrized (`t_1, t_2, ...`) or contradictory
//! - **Step Tracing**: every row operation can be recorded, printed or logged
//!
//! ## Quick Start
//!
//! ```rust
//! use gauss::prelude::*;
//!
//! let matrix = AugmentedMatrix::from_rows(vec![
//!     vec![2, 1, -1, 8],
//!     vec![-3, -1, 2, -11],
//!     vec![-2, 1, 2, -3],
//! ])?;
//! let outcome = Eliminator::default().solve(&matrix)?;
//! assert_eq!(outcome.to_string(), "(2, 3, -1)");
//! # Ok::<(), LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gauss_integers as integers;
pub use gauss_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gauss_integers::{Integer, Rational, RationalError, RationalSource};
    pub use gauss_linalg::{
        AugmentedMatrix, Eliminator, EliminatorConfig, LinalgError, RowOperation, Solution,
        SolveOutcome, TraceLog, TraceSink,
    };
}
