//! Property-based tests for elimination.

#[cfg(test)]
mod tests {
    use gauss_integers::Rational;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{AugmentedMatrix, Eliminator, NoTrace, RowOperation, SolveOutcome, TraceLog};

    // Small entries keep the systems frequently singular, which is where
    // the interesting cases are.
    fn small_entry() -> impl Strategy<Value = i64> {
        -5i64..5i64
    }

    fn matrix() -> impl Strategy<Value = AugmentedMatrix> {
        (1usize..5, 2usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(small_entry(), cols), rows)
                .prop_map(|rows| AugmentedMatrix::from_rows(rows).unwrap())
        })
    }

    fn non_zero_factor() -> impl Strategy<Value = Rational> {
        (
            prop_oneof![(-4i64..=-1i64), (1i64..=4i64)],
            1i64..=3i64,
        )
            .prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    /// An invertible row operation on a matrix with `rows` rows.
    fn row_operation(rows: usize) -> BoxedStrategy<RowOperation> {
        let swap = (0..rows, 0..rows).prop_map(|(first, second)| RowOperation::Swap { first, second });
        let scale =
            (0..rows, non_zero_factor()).prop_map(|(row, factor)| RowOperation::Scale { row, factor });
        if rows < 2 {
            return prop_oneof![swap, scale].boxed();
        }
        // source = target + offset (mod rows) never equals target
        let add_scaled = (0..rows, 1..rows, non_zero_factor()).prop_map(move |(target, offset, factor)| {
            RowOperation::AddScaled {
                target,
                source: (target + offset) % rows,
                factor,
            }
        });
        prop_oneof![swap, scale, add_scaled].boxed()
    }

    fn matrix_with_operations() -> impl Strategy<Value = (AugmentedMatrix, Vec<RowOperation>)> {
        matrix().prop_flat_map(|m| {
            let rows = m.num_rows();
            (Just(m), prop::collection::vec(row_operation(rows), 0..6))
        })
    }

    fn sample_points(count: usize) -> Vec<Vec<Rational>> {
        [0i64, 1, -2]
            .iter()
            .map(|&v| vec![Rational::from(v); count])
            .collect()
    }

    proptest! {
        #[test]
        fn solutions_satisfy_system(m in matrix()) {
            let outcome = Eliminator::default().solve(&m).unwrap();
            if let Some(solution) = outcome.solution() {
                prop_assert_eq!(solution.values().len(), m.num_variables());
                for point in sample_points(solution.free_parameter_count()) {
                    let values = solution.evaluate(&point).unwrap();
                    prop_assert!(m.is_satisfied_by(&values).unwrap());
                }
            }
        }

        #[test]
        fn contradiction_means_no_pivot_row(m in matrix()) {
            let mut reduced = m.clone();
            let outcome = Eliminator::default()
                .solve_in_place(&mut reduced, &mut NoTrace)
                .unwrap();
            if let SolveOutcome::Contradiction { row } = outcome {
                prop_assert!(reduced.has_zero_coefficients(row));
                prop_assert!(!reduced.rhs(row).is_zero());
            }
        }

        #[test]
        fn row_operations_preserve_solution_set((m, ops) in matrix_with_operations()) {
            let mut transformed = m.clone();
            for op in &ops {
                transformed.apply(op).unwrap();
            }

            let eliminator = Eliminator::default();
            let original = eliminator.solve(&m).unwrap();
            let changed = eliminator.solve(&transformed).unwrap();

            prop_assert_eq!(original.is_contradiction(), changed.is_contradiction());
            if let (Some(a), Some(b)) = (original.solution(), changed.solution()) {
                prop_assert_eq!(a.free_parameter_count(), b.free_parameter_count());
                for point in sample_points(a.free_parameter_count()) {
                    let from_a = a.evaluate(&point).unwrap();
                    let from_b = b.evaluate(&point).unwrap();
                    prop_assert!(transformed.is_satisfied_by(&from_a).unwrap());
                    prop_assert!(m.is_satisfied_by(&from_b).unwrap());
                }
            }
        }

        #[test]
        fn solving_is_idempotent(m in matrix()) {
            let eliminator = Eliminator::default();
            let mut reduced = m.clone();
            let first = eliminator.solve_in_place(&mut reduced, &mut NoTrace).unwrap();
            prop_assume!(!first.is_contradiction());

            let mut log = TraceLog::new();
            let mut again = reduced.clone();
            let second = eliminator.solve_in_place(&mut again, &mut log).unwrap();
            prop_assert_eq!(first, second);
            prop_assert!(log.is_empty());
            prop_assert_eq!(again, reduced);
        }

        #[test]
        fn trace_replays_to_reduced_form(m in matrix()) {
            let mut reduced = m.clone();
            let mut log = TraceLog::new();
            Eliminator::default().solve_in_place(&mut reduced, &mut log).unwrap();

            let mut replay = m.clone();
            for op in log.operations() {
                replay.apply(op).unwrap();
            }
            prop_assert_eq!(replay, reduced);
        }
    }
}
