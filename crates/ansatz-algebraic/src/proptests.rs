//! Property-based tests for algebraic number arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::AlgebraicNumber;
    use ansatz_poly::Polynomial;
    use ansatz_rings::{Field, IntegralDomain, Q};

    // x^3 - 2 is irreducible over Q
    fn cube_root_of_two() -> Polynomial<Q> {
        Polynomial::from_coeffs(&Q::from_integer(0), [-2, 0, 0, 1].map(Q::from_integer))
    }

    fn element() -> impl Strategy<Value = AlgebraicNumber<Q>> {
        proptest::collection::vec((-8i64..9i64).prop_map(Q::from_integer), 0..=5).prop_map(|coeffs| {
            let number = Polynomial::from_coeffs(&Q::from_integer(0), coeffs);
            AlgebraicNumber::new(number, cube_root_of_two()).unwrap()
        })
    }

    fn nonzero_element() -> impl Strategy<Value = AlgebraicNumber<Q>> {
        element().prop_filter("element must be non-zero", |a| !a.is_zero())
    }

    proptest! {
        #[test]
        fn representative_is_reduced(a in element()) {
            prop_assert!(a.number().degree().map_or(true, |d| d < 3));
        }

        #[test]
        fn mul_associative(a in element(), b in element(), c in element()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn distributive(a in element(), b in element(), c in element()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn additive_inverse(a in element()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn multiplicative_inverse(a in nonzero_element()) {
            let inv = a.inv().unwrap();
            prop_assert!(a.mul(&inv).is_one());
            prop_assert_eq!(a.checked_inv().unwrap(), inv);
        }

        #[test]
        fn exponentiation_law(a in nonzero_element(), m in -3i64..4, n in -3i64..4) {
            let lhs = a.pow(m).unwrap().mul(&a.pow(n).unwrap());
            prop_assert_eq!(lhs, a.pow(m + n).unwrap());
        }
    }
}
