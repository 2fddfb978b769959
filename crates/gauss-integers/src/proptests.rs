//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Normalization

        #[test]
        fn rational_is_reduced(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den).unwrap();
            let (n, d) = (r.numerator(), r.denominator());
            prop_assert!(!d.is_negative() && !d.is_zero());
            prop_assert!(n.gcd(&d).is_one());
            // n'/d' == n/d  <=>  n' * d == n * d'
            prop_assert_eq!(n.to_i64().unwrap() * den, num * d.to_i64().unwrap());
        }

        #[test]
        fn rational_zero_is_canonical(den in non_zero_int()) {
            let r = Rational::from_i64(0, den).unwrap();
            prop_assert!(r.denominator().is_one());
            prop_assert_eq!(r, Rational::zero());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = Integer::new(a).gcd(&Integer::new(b)).to_i64().unwrap();
            prop_assert!(g > 0);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rendering

        #[test]
        fn display_parse_round_trip(r in rational()) {
            let parsed: Rational = r.to_string().parse().unwrap();
            prop_assert_eq!(parsed, r);
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, a.clone() + (&b + &c));
        }

        #[test]
        fn rational_sub_is_add_neg(a in rational(), b in rational()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a * &b) * &c, a.clone() * (&b * &c));
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_div_then_mul_is_exact(a in rational(), b in non_zero_rational()) {
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(q * &b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.recip().unwrap();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        // Ordering

        #[test]
        fn rational_order_matches_float(a in rational(), b in rational()) {
            // Small operands are represented well enough for floats to agree.
            if a != b {
                prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
            }
        }

        #[test]
        fn float_conversion_round_trips(x in -1.0e6f64..1.0e6f64) {
            let r = Rational::try_from(x).unwrap();
            prop_assert_eq!(r.to_f64(), x);
        }
    }
}
