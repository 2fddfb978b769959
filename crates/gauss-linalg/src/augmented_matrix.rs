//! Augmented matrices of exact rationals.
//!
//! An augmented matrix holds the coefficients of a linear system with the
//! right-hand side appended as the last column. It can only be changed
//! through the three elementary row operations, each of which validates its
//! arguments before touching any cell.

use std::fmt;
use std::ops::Index;

use gauss_integers::{Rational, RationalSource};
use num_traits::{One, Zero};

use crate::{LinalgError, RowOperation};

/// Augmented matrix `[A | b]` stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows (equations).
    num_rows: usize,
    /// Number of columns (variables plus the right-hand side).
    num_cols: usize,
}

impl AugmentedMatrix {
    /// Creates a matrix from rows of anything convertible to a rational.
    ///
    /// Every cell is coerced through [`Rational::from_source`], so rows may
    /// mix integers, floats, rationals and `n/d` strings.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if there are no rows, fewer
    /// than two columns, or rows of unequal length, and
    /// [`LinalgError::Arithmetic`] if a cell cannot be converted.
    pub fn from_rows<T: Into<RationalSource>>(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| Rational::from_source(cell, None))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rational_rows(rows)
    }

    /// Creates a matrix from rows of rationals.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if there are no rows, fewer
    /// than two columns, or rows of unequal length.
    pub fn from_rational_rows(rows: Vec<Vec<Rational>>) -> Result<Self, LinalgError> {
        let Some(first) = rows.first() else {
            return Err(LinalgError::InvalidArgument(
                "an augmented matrix needs at least one row".to_string(),
            ));
        };
        let num_rows = rows.len();
        let num_cols = first.len();
        if num_cols < 2 {
            return Err(LinalgError::InvalidArgument(format!(
                "an augmented matrix needs a coefficient column and a right-hand side, got {num_cols} column(s)"
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != num_cols) {
            return Err(LinalgError::InvalidArgument(format!(
                "row {} has {} entries, expected {num_cols}",
                index + 1,
                row.len()
            )));
        }

        let data: Vec<Rational> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns, right-hand side included.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of variables (columns left of the bar).
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.num_cols - 1
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row, right-hand side included.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the coefficient cells of a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn coefficients(&self, row: usize) -> &[Rational] {
        &self.row(row)[..self.num_variables()]
    }

    /// Returns the right-hand side of a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn rhs(&self, row: usize) -> &Rational {
        &self[(row, self.num_cols - 1)]
    }

    /// Returns true if every coefficient of the row is zero.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn has_zero_coefficients(&self, row: usize) -> bool {
        self.coefficients(row).iter().all(Zero::is_zero)
    }

    /// Returns a detached copy of all rows.
    ///
    /// Changing the copy does not affect the matrix.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<Rational>> {
        self.data.chunks(self.num_cols).map(<[Rational]>::to_vec).collect()
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row < self.num_rows {
            Ok(())
        } else {
            Err(LinalgError::InvalidArgument(format!(
                "row index {row} out of bounds for a matrix with {} rows",
                self.num_rows
            )))
        }
    }

    fn row_mut(&mut self, row: usize) -> &mut [Rational] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place. Swapping a row with itself does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if either index is out of
    /// bounds.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), LinalgError> {
        self.check_row(i)?;
        self.check_row(j)?;
        if i == j {
            return Ok(());
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
        Ok(())
    }

    /// Scales a row by a scalar: row[row] *= factor.
    ///
    /// A zero factor is accepted and wipes the row.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if `row` is out of bounds.
    pub fn scale_row(&mut self, row: usize, factor: &Rational) -> Result<(), LinalgError> {
        self.check_row(row)?;
        if factor.is_one() {
            return Ok(());
        }
        for cell in self.row_mut(row) {
            *cell = &*cell * factor;
        }
        Ok(())
    }

    /// Adds a scaled row to another: row[target] += factor * row[source].
    ///
    /// The source row is left unchanged (unless it is also the target).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if either index is out of
    /// bounds.
    pub fn add_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &Rational,
    ) -> Result<(), LinalgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        if factor.is_zero() {
            return Ok(());
        }
        let source_start = source * self.num_cols;
        let target_start = target * self.num_cols;
        for k in 0..self.num_cols {
            let delta = &self.data[source_start + k] * factor;
            let cell = &mut self.data[target_start + k];
            *cell = &*cell + &delta;
        }
        Ok(())
    }

    /// Applies a recorded row operation.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if the operation names a row
    /// that does not exist.
    pub fn apply(&mut self, operation: &RowOperation) -> Result<(), LinalgError> {
        match operation {
            RowOperation::Swap { first, second } => self.swap_rows(*first, *second),
            RowOperation::Scale { row, factor } => self.scale_row(*row, factor),
            RowOperation::AddScaled {
                target,
                source,
                factor,
            } => self.add_scaled_row(*target, *source, factor),
        }
    }

    /// Checks whether an assignment of the variables satisfies every
    /// equation.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if `values` does not hold
    /// exactly one value per variable.
    pub fn is_satisfied_by(&self, values: &[Rational]) -> Result<bool, LinalgError> {
        if values.len() != self.num_variables() {
            return Err(LinalgError::InvalidArgument(format!(
                "expected {} values, got {}",
                self.num_variables(),
                values.len()
            )));
        }
        Ok((0..self.num_rows).all(|row| {
            let lhs = self
                .coefficients(row)
                .iter()
                .zip(values)
                .fold(Rational::zero(), |acc, (a, x)| acc + a * x);
            &lhs == self.rhs(row)
        }))
    }

    /// Renders the system as one equation per line, e.g.
    /// `x_1 + 2x_2 - x_3 = -1`.
    #[must_use]
    pub fn as_equations(&self) -> String {
        (0..self.num_rows)
            .map(|row| {
                let mut lhs = String::new();
                for (col, coefficient) in self.coefficients(row).iter().enumerate() {
                    if coefficient.is_zero() {
                        continue;
                    }
                    let magnitude = coefficient.abs();
                    match (lhs.is_empty(), coefficient.is_negative()) {
                        (true, true) => lhs.push('-'),
                        (true, false) => {}
                        (false, true) => lhs.push_str(" - "),
                        (false, false) => lhs.push_str(" + "),
                    }
                    if !magnitude.is_one() {
                        if magnitude.is_integer() {
                            lhs.push_str(&magnitude.to_string());
                        } else {
                            lhs.push_str(&format!("({magnitude})"));
                        }
                    }
                    lhs.push_str(&format!("x_{}", col + 1));
                }
                if lhs.is_empty() {
                    lhs.push('0');
                }
                format!("{lhs} = {}", self.rhs(row))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<(usize, usize)> for AugmentedMatrix {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[row * self.num_cols + col]
    }
}

/// Renders `| c1 c2 ... cn-1 | cn |` per row, every column padded on the
/// right to its widest cell.
impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = (0..self.num_cols)
            .map(|col| {
                (0..self.num_rows)
                    .map(|row| self[(row, col)].to_string().len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let last = self.num_cols - 1;

        for row in 0..self.num_rows {
            f.write_str("|")?;
            for (col, &width) in widths.iter().enumerate().take(last) {
                write!(f, " {:<width$} ", self[(row, col)])?;
            }
            writeln!(f, "| {:<width$} |", self[(row, last)], width = widths[last])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    fn sample() -> AugmentedMatrix {
        AugmentedMatrix::from_rows(vec![
            vec![1, 2, -1, -1],
            vec![-1, 1, -2, -5],
            vec![2, 3, -1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let m = sample();
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_cols(), 4);
        assert_eq!(m.num_variables(), 3);
        assert_eq!(m[(1, 2)], Rational::from(-2));
        assert_eq!(m.rhs(1), &Rational::from(-5));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 4), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_last_column_panics() {
        // (0, 4) would otherwise land on the first cell of row 1
        let m = sample();
        let _ = &m[(0, 4)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_last_row_panics() {
        let m = sample();
        let _ = &m[(3, 0)];
    }

    #[test]
    fn test_mixed_sources() {
        let m = AugmentedMatrix::from_rows(vec![vec![
            RationalSource::from(1),
            RationalSource::from(0.5),
            RationalSource::from("-7/2"),
            RationalSource::from(q(2, 3)),
        ]])
        .unwrap();
        assert_eq!(m.row(0), &[q(1, 1), q(1, 2), q(-7, 2), q(2, 3)]);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let empty: Vec<Vec<i64>> = Vec::new();
        assert!(matches!(
            AugmentedMatrix::from_rows(empty),
            Err(LinalgError::InvalidArgument(_))
        ));
        assert!(matches!(
            AugmentedMatrix::from_rows(vec![vec![1]]),
            Err(LinalgError::InvalidArgument(_))
        ));
        assert!(matches!(
            AugmentedMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]),
            Err(LinalgError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_bad_cells() {
        assert!(matches!(
            AugmentedMatrix::from_rows(vec![vec!["1", "abc"]]),
            Err(LinalgError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample();
        m.swap_rows(0, 2).unwrap();
        assert_eq!(m.row(0), sample().row(2));
        assert_eq!(m.row(2), sample().row(0));

        let before = m.clone();
        m.swap_rows(1, 1).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_scale_row() {
        let mut m = sample();
        m.scale_row(1, &q(-1, 2)).unwrap();
        assert_eq!(m.row(1), &[q(1, 2), q(-1, 2), q(1, 1), q(5, 2)]);

        m.scale_row(0, &Rational::zero()).unwrap();
        assert!(m.row(0).iter().all(Zero::is_zero));
    }

    #[test]
    fn test_add_scaled_row() {
        let mut m = sample();
        m.add_scaled_row(2, 0, &q(-2, 1)).unwrap();
        assert_eq!(m.row(2), &[q(0, 1), q(-1, 1), q(1, 1), q(2, 1)]);
        // source untouched
        assert_eq!(m.row(0), sample().row(0));
    }

    #[test]
    fn test_out_of_bounds_leaves_matrix_untouched() {
        let mut m = sample();
        assert!(m.swap_rows(0, 3).is_err());
        assert!(m.scale_row(5, &q(2, 1)).is_err());
        assert!(m.add_scaled_row(0, 3, &q(2, 1)).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let mut direct = sample();
        direct.add_scaled_row(1, 0, &q(1, 1)).unwrap();

        let mut applied = sample();
        applied
            .apply(&RowOperation::AddScaled {
                target: 1,
                source: 0,
                factor: q(1, 1),
            })
            .unwrap();
        assert_eq!(direct, applied);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let m = sample();
        let mut rows = m.snapshot();
        rows[0][0] = q(42, 1);
        assert_eq!(m[(0, 0)], q(1, 1));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![q(2, 1), q(3, 1), q(-1, 1), q(0, 1)]);
    }

    #[test]
    fn test_render() {
        let m = AugmentedMatrix::from_rows(vec![vec!["1", "-1/2", "3"], vec!["10", "2", "-4"]])
            .unwrap();
        assert_eq!(m.to_string(), "| 1   -1/2 | 3  |\n| 10  2    | -4 |\n");
    }

    #[test]
    fn test_as_equations() {
        let m = AugmentedMatrix::from_rows(vec![
            vec!["1", "2", "-1", "-1"],
            vec!["-1", "0", "1/2", "3"],
            vec!["0", "0", "0", "0"],
        ])
        .unwrap();
        assert_eq!(
            m.as_equations(),
            "x_1 + 2x_2 - x_3 = -1\n-x_1 + (1/2)x_3 = 3\n0 = 0"
        );
    }

    #[test]
    fn test_is_satisfied_by() {
        let m = sample();
        let x = vec![q(3, 1), q(-2, 1), q(0, 1)];
        assert!(m.is_satisfied_by(&x).unwrap());
        let y = vec![q(1, 1), q(1, 1), q(1, 1)];
        assert!(!m.is_satisfied_by(&y).unwrap());
        assert!(m.is_satisfied_by(&x[..2]).is_err());
    }
}
