//! Property-based tests for rational function arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::RationalFunction;
    use ansatz_poly::{poly_gcd, Polynomial};
    use ansatz_rings::{Field, IntegralDomain, Q};

    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec((-6i64..7i64).prop_map(Q::from_integer), 1..=4)
            .prop_map(|coeffs| Polynomial::from_coeffs(&Q::from_integer(0), coeffs))
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn rational_func() -> impl Strategy<Value = RationalFunction<Q>> {
        (small_poly(), nonzero_poly()).prop_map(|(n, d)| RationalFunction::new(n, d).unwrap())
    }

    fn nonzero_rational_func() -> impl Strategy<Value = RationalFunction<Q>> {
        (nonzero_poly(), nonzero_poly()).prop_map(|(n, d)| RationalFunction::new(n, d).unwrap())
    }

    fn is_canonical(f: &RationalFunction<Q>) -> bool {
        let coprime = poly_gcd(f.numerator(), f.denominator()).unwrap().is_one();
        let monic_or_zero = if f.numerator().is_zero() {
            f.denominator().is_one()
        } else {
            f.numerator().is_monic()
        };
        coprime && monic_or_zero
    }

    proptest! {
        #[test]
        fn construction_is_canonical(f in rational_func()) {
            prop_assert!(is_canonical(&f));
        }

        #[test]
        fn normalization_is_idempotent(f in rational_func()) {
            let again = RationalFunction::new(f.numerator().clone(), f.denominator().clone()).unwrap();
            prop_assert_eq!(again, f);
        }

        #[test]
        fn negation_stays_canonical(f in rational_func()) {
            let neg = f.neg();
            prop_assert!(is_canonical(&neg));
            let rebuilt = RationalFunction::new(neg.numerator().clone(), neg.denominator().clone()).unwrap();
            prop_assert_eq!(rebuilt, neg);
        }

        #[test]
        fn add_commutative(f in rational_func(), g in rational_func()) {
            prop_assert_eq!(f.add(&g), g.add(&f));
        }

        #[test]
        fn add_associative(f in rational_func(), g in rational_func(), h in rational_func()) {
            prop_assert_eq!(f.add(&g).add(&h), f.add(&g.add(&h)));
        }

        #[test]
        fn distributive(f in rational_func(), g in rational_func(), h in rational_func()) {
            prop_assert_eq!(f.mul(&g.add(&h)), f.mul(&g).add(&f.mul(&h)));
        }

        #[test]
        fn results_are_canonical(f in rational_func(), g in nonzero_rational_func()) {
            prop_assert!(is_canonical(&f.add(&g)));
            prop_assert!(is_canonical(&f.sub(&g)));
            prop_assert!(is_canonical(&f.mul(&g)));
            prop_assert!(is_canonical(&f.div(&g).unwrap()));
        }

        #[test]
        fn multiplicative_inverse(f in nonzero_rational_func()) {
            prop_assert!(f.mul(&f.inv().unwrap()).is_one());
        }

        #[test]
        fn eval_is_homomorphic(f in rational_func(), g in rational_func(), x in -5i64..6) {
            let x = Q::from_integer(x);
            if let (Some(a), Some(b)) = (f.eval(&x), g.eval(&x)) {
                prop_assert_eq!(f.mul(&g).eval(&x), Some(a.mul(&b)));
            }
        }
    }
}
