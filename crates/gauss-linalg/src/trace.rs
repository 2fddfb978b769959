//! Step reporting for elimination.
//!
//! The eliminator never prints. Every row operation it performs is handed to
//! a [`TraceSink`] together with the matrix state right after the operation,
//! and the caller decides what to do with it: drop it ([`NoTrace`]), keep it
//! ([`TraceLog`]) or forward it to the `log` facade ([`LogTrace`]).

use std::fmt;

use crate::{AugmentedMatrix, RowOperation};

/// Elimination phase a step belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pivot selection, normalization and elimination below pivots.
    ForwardElimination,
    /// Elimination above pivots.
    BackSubstitution,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForwardElimination => f.write_str("forward elimination"),
            Self::BackSubstitution => f.write_str("back substitution"),
        }
    }
}

/// A row operation that was just applied, borrowed from the eliminator.
#[derive(Clone, Copy, Debug)]
pub struct TraceStep<'a> {
    /// Phase the operation belongs to.
    pub phase: Phase,
    /// The operation itself.
    pub operation: &'a RowOperation,
    /// Matrix state after the operation.
    pub matrix: &'a AugmentedMatrix,
}

/// Receiver for elimination steps.
pub trait TraceSink {
    /// Called after every row operation.
    fn record(&mut self, step: &TraceStep<'_>);

    /// Called once when a contradictory row ends elimination.
    fn contradiction(&mut self, row: usize, matrix: &AugmentedMatrix) {
        let _ = (row, matrix);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn record(&mut self, step: &TraceStep<'_>) {
        (**self).record(step);
    }

    fn contradiction(&mut self, row: usize, matrix: &AugmentedMatrix) {
        (**self).contradiction(row, matrix);
    }
}

/// Discards every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _step: &TraceStep<'_>) {}
}

/// An owned copy of a [`TraceStep`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedStep {
    /// Phase the operation belongs to.
    pub phase: Phase,
    /// The operation itself.
    pub operation: RowOperation,
    /// Matrix state after the operation.
    pub matrix: AugmentedMatrix,
}

/// Collects every step for later inspection or printing.
///
/// `Display` reproduces a step-by-step narration: each operation, a blank
/// line, then the matrix after it.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    steps: Vec<RecordedStep>,
    contradiction: Option<usize>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    /// Returns the recorded operations in order.
    pub fn operations(&self) -> impl Iterator<Item = &RowOperation> {
        self.steps.iter().map(|step| &step.operation)
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the contradictory row, if elimination stopped on one.
    #[must_use]
    pub fn contradiction_row(&self) -> Option<usize> {
        self.contradiction
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, step: &TraceStep<'_>) {
        self.steps.push(RecordedStep {
            phase: step.phase,
            operation: step.operation.clone(),
            matrix: step.matrix.clone(),
        });
    }

    fn contradiction(&mut self, row: usize, _matrix: &AugmentedMatrix) {
        self.contradiction = Some(row);
    }
}

impl fmt::Display for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step.operation)?;
            writeln!(f)?;
            writeln!(f, "{}", step.matrix)?;
        }
        if let Some(row) = self.contradiction {
            writeln!(f, "Contradiction on row {}! There are no solutions!", row + 1)?;
        }
        Ok(())
    }
}

/// Forwards every step to the `log` facade.
#[derive(Clone, Copy, Debug)]
pub struct LogTrace {
    level: log::Level,
}

impl LogTrace {
    /// Creates a sink logging at the given level.
    #[must_use]
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl TraceSink for LogTrace {
    fn record(&mut self, step: &TraceStep<'_>) {
        log::log!(
            self.level,
            "{}: {}\n{}",
            step.phase,
            step.operation,
            step.matrix
        );
    }

    fn contradiction(&mut self, row: usize, matrix: &AugmentedMatrix) {
        log::log!(
            self.level,
            "contradiction on row {}, no solutions\n{}",
            row + 1,
            matrix
        );
    }
}
