//! Field axioms checked uniformly across every `Field` implementation.

use ansatz::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn small_int() -> impl Strategy<Value = i64> {
    -7i64..8i64
}

fn small_poly(max_len: usize) -> impl Strategy<Value = Polynomial<Q>> {
    proptest::collection::vec(small_int().prop_map(q), 0..=max_len)
        .prop_map(|coeffs| Polynomial::from_coeffs(&q(0), coeffs))
}

fn nonzero_poly(max_len: usize) -> impl Strategy<Value = Polynomial<Q>> {
    small_poly(max_len).prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn rational() -> impl Strategy<Value = Q> {
    (small_int(), 1i64..6i64).prop_map(|(n, d)| Q::new(n, d))
}

fn quotient() -> impl Strategy<Value = QuotientField<Z>> {
    (small_int(), small_int().prop_filter("denominator must be non-zero", |d| *d != 0))
        .prop_map(|(n, d)| QuotientField::new(Z::new(n), Z::new(d)).unwrap())
}

fn rational_func() -> impl Strategy<Value = RationalFunction<Q>> {
    (small_poly(3), nonzero_poly(3)).prop_map(|(n, d)| RationalFunction::new(n, d).unwrap())
}

fn laurent() -> impl Strategy<Value = ExtendedPowerSeries<Q>> {
    (small_poly(4), -2i64..=2i64)
        .prop_map(|(p, power)| ExtendedPowerSeries::new(PowerSeries::from_polynomial(p), power))
}

// Q(∛2)
fn algebraic() -> impl Strategy<Value = AlgebraicNumber<Q>> {
    small_poly(3).prop_map(|p| {
        let m = Polynomial::from_coeffs(&q(0), [-2, 0, 0, 1].map(Q::from_integer));
        AlgebraicNumber::new(p, m).unwrap()
    })
}

/// Checks associativity, distributivity, identities and inverses on a
/// triple of elements, `a` being nonzero.
fn check_field_axioms<F: Field>(a: &F, b: &F, c: &F) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.add(b).add(c), a.add(&b.add(c)), "additive associativity");
    prop_assert_eq!(a.mul(b).mul(c), a.mul(&b.mul(c)), "multiplicative associativity");
    prop_assert_eq!(a.mul(&b.add(c)), a.mul(b).add(&a.mul(c)), "distributivity");
    prop_assert_eq!(a.mul(&a.one()), a.clone(), "multiplicative identity");
    prop_assert_eq!(a.add(&a.zero()), a.clone(), "additive identity");
    prop_assert_eq!(a.add(&a.neg()), a.zero(), "additive inverse");
    prop_assert_eq!(a.mul(&a.inv().unwrap()), a.one(), "multiplicative inverse");
    prop_assert_eq!(a.div(a).unwrap(), a.one(), "self division");
    Ok(())
}

/// Checks a^m * a^n == a^(m + n).
fn check_exponentiation_law<F: Field>(a: &F, m: i64, n: i64) -> Result<(), TestCaseError> {
    let lhs = a.pow(m).unwrap().mul(&a.pow(n).unwrap());
    prop_assert_eq!(lhs, a.pow(m + n).unwrap(), "a^{} * a^{}", m, n);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn rationals(
        a in rational().prop_filter("a must be non-zero", |a| !a.is_zero()),
        b in rational(),
        c in rational(),
        m in -3i64..=3,
        n in -3i64..=3,
    ) {
        check_field_axioms(&a, &b, &c)?;
        check_exponentiation_law(&a, m, n)?;
    }

    #[test]
    fn quotient_field(
        a in quotient().prop_filter("a must be non-zero", |a| !a.is_zero()),
        b in quotient(),
        c in quotient(),
        m in -3i64..=3,
        n in -3i64..=3,
    ) {
        check_field_axioms(&a, &b, &c)?;
        check_exponentiation_law(&a, m, n)?;
    }

    #[test]
    fn rational_functions(
        a in rational_func().prop_filter("a must be non-zero", |a| !a.is_zero()),
        b in rational_func(),
        c in rational_func(),
        m in -2i64..=2,
        n in -2i64..=2,
    ) {
        check_field_axioms(&a, &b, &c)?;
        check_exponentiation_law(&a, m, n)?;
    }

    #[test]
    fn laurent_series(
        a in laurent().prop_filter("a must be non-zero", |a| !a.is_probable_zero()),
        b in laurent(),
        c in laurent(),
        m in -2i64..=2,
        n in -2i64..=2,
    ) {
        check_field_axioms(&a, &b, &c)?;
        check_exponentiation_law(&a, m, n)?;
    }

    #[test]
    fn algebraic_numbers(
        a in algebraic().prop_filter("a must be non-zero", |a| !a.is_zero()),
        b in algebraic(),
        c in algebraic(),
        m in -3i64..=3,
        n in -3i64..=3,
    ) {
        check_field_axioms(&a, &b, &c)?;
        check_exponentiation_law(&a, m, n)?;
    }
}

#[test]
fn test_laurent_with_pole_and_zero() {
    // Fixed elements mixing a pole, a zero at the origin and a unit
    let laurent = |coeffs: &[i64], power| {
        let main = PowerSeries::from_polynomial(Polynomial::from_coeffs(&q(0), coeffs.iter().map(|&n| q(n))));
        ExtendedPowerSeries::new(main, power)
    };
    let a = laurent(&[1, 2, 3], 1);
    let b = laurent(&[0, 1, -1], 0);
    let c = laurent(&[4, 0, 1], -2);
    check_field_axioms(&a, &b, &c).unwrap();
    check_exponentiation_law(&a, -3, 2).unwrap();
}
