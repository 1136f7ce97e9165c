//! Property-based tests for power series and Laurent series.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::laurent::ExtendedPowerSeries;
    use crate::power_series::PowerSeries;
    use ansatz_rings::{Field, IntegralDomain, Q};

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-9i64..10i64).prop_map(Q::from_integer)
    }

    // Finite series of up to 5 terms
    fn small_series() -> impl Strategy<Value = PowerSeries<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5)
            .prop_map(|coeffs| PowerSeries::from_coeffs(&Q::from_integer(0), coeffs))
    }

    fn invertible_series() -> impl Strategy<Value = PowerSeries<Q>> {
        small_series().prop_filter("constant term must be nonzero", PowerSeries::is_invertible)
    }

    // Laurent series with a nonzero leading coefficient and a pole of order up to 3
    fn nonzero_laurent() -> impl Strategy<Value = ExtendedPowerSeries<Q>> {
        (invertible_series(), -3i64..=3i64).prop_map(|(s, power)| ExtendedPowerSeries::new(s, power))
    }

    fn laurent() -> impl Strategy<Value = ExtendedPowerSeries<Q>> {
        (small_series(), -3i64..=3i64).prop_map(|(s, power)| ExtendedPowerSeries::new(s, power))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn series_mul_commutative(a in small_series(), b in small_series()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn series_distributive(a in small_series(), b in small_series(), c in small_series()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn series_inverse(a in invertible_series()) {
            let inv = a.inv().unwrap();
            prop_assert!(a.mul(&inv).is_probable_one());
        }

        #[test]
        fn series_order_of_shift(a in invertible_series(), s in 0i64..10) {
            prop_assert_eq!(a.shift(s).order(), Some(usize::try_from(s).unwrap()));
            prop_assert_eq!(a.shift(s).shift(-s), a);
        }

        #[test]
        fn laurent_normalized(a in nonzero_laurent()) {
            prop_assert!(!a.main_series().coeff(0).is_zero());
        }

        #[test]
        fn laurent_add_associative(a in laurent(), b in laurent(), c in laurent()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn laurent_additive_inverse(a in laurent()) {
            prop_assert!(a.add(&a.neg()).is_probable_zero());
        }

        #[test]
        fn laurent_mul_valuation(a in nonzero_laurent(), b in nonzero_laurent()) {
            prop_assert_eq!(a.mul(&b).valuation(), a.valuation() + b.valuation());
        }

        #[test]
        fn laurent_multiplicative_inverse(a in nonzero_laurent()) {
            let inv = a.inv().unwrap();
            prop_assert_eq!(inv.valuation(), -a.valuation());
            prop_assert_eq!(a.mul(&inv), a.one());
        }

        #[test]
        fn laurent_div_then_mul(a in laurent(), b in nonzero_laurent()) {
            let quotient = a.div(&b).unwrap();
            prop_assert_eq!(quotient.mul(&b), a);
        }
    }
}
