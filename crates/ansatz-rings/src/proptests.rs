//! Property-based tests for the base structures.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::integers::Z;
    use crate::quotient_field::QuotientField;
    use crate::rationals::Q;
    use crate::traits::{Field, IntegralDomain};

    // Strategy for generating small rationals
    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !q.is_zero())
    }

    // Unreduced fractions over Z
    fn small_frac() -> impl Strategy<Value = QuotientField<Z>> {
        (-30i64..30i64, prop_oneof![(-10i64..=-1i64), (1i64..=10i64)])
            .prop_map(|(n, d)| QuotientField::new(Z::new(n), Z::new(d)).unwrap())
    }

    proptest! {
        #[test]
        fn q_add_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn q_mul_identity(a in small_q()) {
            prop_assert_eq!(a.mul(&a.one()), a);
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn q_multiplicative_inverse(a in nonzero_q()) {
            prop_assert!(a.mul(&a.inv().unwrap()).is_one());
        }

        #[test]
        fn q_exponentiation_law(a in nonzero_q(), p in -6i64..6, r in -6i64..6) {
            let lhs = a.pow(p).unwrap().mul(&a.pow(r).unwrap());
            prop_assert_eq!(lhs, a.pow(p + r).unwrap());
        }

        #[test]
        fn frac_add_associative(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn frac_distributive(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn frac_inverse(a in small_frac()) {
            prop_assume!(!a.is_zero());
            prop_assert!(a.mul(&a.inv().unwrap()).is_one());
            prop_assert!(a.sub(&a).is_zero());
        }
    }
}
