//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::division::{expand_in_point, poly_div_rem};
    use crate::algorithms::gcd::{poly_extended_gcd, poly_gcd, poly_half_extended_gcd};
    use crate::polynomial::Polynomial;
    use ansatz_rings::{IntegralDomain, Q};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|coeffs| Polynomial::from_coeffs(&Q::from_integer(0), coeffs))
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&a.one()), a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over an integral domain
            let product = a.mul(&b);
            prop_assert_eq!(product.degree(), Some(a.degree().unwrap() + b.degree().unwrap()));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x).mul(&b.eval(&x)));
        }

        // Division and GCD

        #[test]
        fn division_identity(f in small_poly(), g in nonzero_poly()) {
            let (q, r) = poly_div_rem(&f, &g).unwrap();
            prop_assert_eq!(q.mul(&g).add(&r), f);
            prop_assert!(r.is_zero() || r.degree() < g.degree());
        }

        #[test]
        fn bezout_identity(f in small_poly(), g in small_poly()) {
            let (d, s, t) = poly_extended_gcd(&f, &g).unwrap();
            prop_assert_eq!(s.mul(&f).add(&t.mul(&g)), d.clone());
            if !d.is_zero() {
                prop_assert!(poly_div_rem(&f, &d).unwrap().1.is_zero());
                prop_assert!(poly_div_rem(&g, &d).unwrap().1.is_zero());
            }
        }

        #[test]
        fn gcd_agrees_with_extended(f in nonzero_poly(), g in nonzero_poly()) {
            let (d, _, _) = poly_extended_gcd(&f, &g).unwrap();
            prop_assert_eq!(poly_gcd(&f, &g).unwrap(), d);
        }

        #[test]
        fn half_extended_congruence(f in nonzero_poly(), g in nonzero_poly()) {
            // s * f ≡ gcd (mod g)
            let (d, s) = poly_half_extended_gcd(&f, &g).unwrap();
            let lhs = poly_div_rem(&s.mul(&f), &g).unwrap().1;
            let rhs = poly_div_rem(&d, &g).unwrap().1;
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn expansion_evaluates_consistently(f in small_poly(), a in small_coeff(), x in small_coeff()) {
            // f(x) = F(x - a) where F is the expansion of f around a
            let expanded = expand_in_point(&f, &a);
            prop_assert_eq!(expanded.eval(&x.sub(&a)), f.eval(&x));
        }
    }
}
