//! Parametrized solution sets.
//!
//! A consistent system is described by one [`Expression`] per variable. Each
//! expression is a constant plus rational multiples of free parameters, so a
//! unique solution is simply the case where no parameter appears.

use std::fmt;

use gauss_integers::Rational;
use num_traits::{One, Zero};

use crate::LinalgError;

/// A free parameter ranging over all real numbers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parameter {
    index: usize,
    name: String,
}

impl Parameter {
    pub(crate) fn new(index: usize, name: String) -> Self {
        Self { index, name }
    }

    /// Zero-based position among the solution's parameters.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name, e.g. `t_1`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `constant + Σ coefficient * parameter`.
///
/// Terms are kept sorted by parameter index with non-zero coefficients only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    constant: Rational,
    terms: Vec<(Parameter, Rational)>,
}

impl Expression {
    /// A fixed value.
    #[must_use]
    pub fn constant(value: Rational) -> Self {
        Self {
            constant: value,
            terms: Vec::new(),
        }
    }

    /// A bare free parameter.
    #[must_use]
    pub fn parameter(parameter: Parameter) -> Self {
        Self {
            constant: Rational::zero(),
            terms: vec![(parameter, Rational::one())],
        }
    }

    /// The parameter terms, ordered by parameter index.
    #[must_use]
    pub fn terms(&self) -> &[(Parameter, Rational)] {
        &self.terms
    }

    /// Returns the value if no parameter appears.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Rational> {
        self.terms.is_empty().then_some(&self.constant)
    }

    /// self -= factor * other, merging like terms.
    pub(crate) fn sub_scaled(&mut self, factor: &Rational, other: &Self) {
        self.constant = &self.constant - &(factor * &other.constant);

        for (parameter, coefficient) in &other.terms {
            let delta = factor * coefficient;
            match self
                .terms
                .binary_search_by_key(&parameter.index, |(p, _)| p.index)
            {
                Ok(pos) => {
                    let merged = &self.terms[pos].1 - &delta;
                    if merged.is_zero() {
                        self.terms.remove(pos);
                    } else {
                        self.terms[pos].1 = merged;
                    }
                }
                Err(pos) => self.terms.insert(pos, (parameter.clone(), -delta)),
            }
        }
    }

    /// Substitutes parameter values, indexed by [`Parameter::index`].
    ///
    /// Callers check that `values` covers every parameter.
    pub(crate) fn evaluate(&self, values: &[Rational]) -> Rational {
        self.terms
            .iter()
            .fold(self.constant.clone(), |acc, (parameter, coefficient)| {
                acc + coefficient * &values[parameter.index]
            })
    }
}

/// Renders `3`, `t_1`, `3 - t_1` or `-1/2 + 2*t_1 - t_2`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.constant);
        }

        let mut first = true;
        if !self.constant.is_zero() {
            write!(f, "{}", self.constant)?;
            first = false;
        }
        for (parameter, coefficient) in &self.terms {
            match (first, coefficient.is_negative()) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            let magnitude = coefficient.abs();
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            write!(f, "{parameter}")?;
            first = false;
        }
        Ok(())
    }
}

/// Solution set of a consistent system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: Vec<Expression>,
    parameters: Vec<Parameter>,
}

impl Solution {
    pub(crate) fn new(values: Vec<Expression>, parameters: Vec<Parameter>) -> Self {
        Self { values, parameters }
    }

    /// One expression per variable, in column order.
    #[must_use]
    pub fn values(&self) -> &[Expression] {
        &self.values
    }

    /// Free parameters in naming order (`t_1` first).
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of free parameters.
    #[must_use]
    pub fn free_parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// True when the system has exactly one solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The single solution vector, if the solution is unique.
    #[must_use]
    pub fn unique_values(&self) -> Option<Vec<Rational>> {
        self.values
            .iter()
            .map(|value| value.as_constant().cloned())
            .collect()
    }

    /// Picks one member of the solution family by fixing every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] unless exactly one value per
    /// free parameter is supplied.
    pub fn evaluate(&self, parameter_values: &[Rational]) -> Result<Vec<Rational>, LinalgError> {
        if parameter_values.len() != self.parameters.len() {
            return Err(LinalgError::InvalidArgument(format!(
                "expected {} parameter values, got {}",
                self.parameters.len(),
                parameter_values.len()
            )));
        }
        Ok(self
            .values
            .iter()
            .map(|value| value.evaluate(parameter_values))
            .collect())
    }
}

/// Renders `(e_1, ..., e_n)`, followed by `  t_1, ..., t_k ∈ ℝ` when there
/// are free parameters.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")?;

        if !self.parameters.is_empty() {
            f.write_str("  ")?;
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{parameter}")?;
            }
            f.write_str(" \u{2208} \u{211d}")?;
        }
        Ok(())
    }
}

/// Result of running elimination on a system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The system is consistent.
    Solved(Solution),
    /// A reduced row reads `0 = c` with `c != 0`; there is no solution.
    Contradiction {
        /// Zero-based index of the contradictory row.
        row: usize,
    },
}

impl SolveOutcome {
    /// True if the system has no solution.
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction { .. })
    }

    /// The solution, if the system is consistent.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Contradiction { .. } => None,
        }
    }

    /// Consumes the outcome, returning the solution if there is one.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Contradiction { .. } => None,
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(solution) => write!(f, "{solution}"),
            Self::Contradiction { row } => {
                write!(f, "no solution (contradiction on row {})", row + 1)
            }
        }
    }
}
