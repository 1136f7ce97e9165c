//! Polynomial GCD algorithms.
//!
//! This module provides the Euclidean algorithm over a coefficient field,
//! together with the extended variants that track Bézout coefficients.
//! Every returned GCD is monic.

use ansatz_rings::{Field, IntegralDomain, Result};

use crate::algorithms::division::poly_div_rem;
use crate::polynomial::Polynomial;

/// Computes the monic GCD of two polynomials using the Euclidean algorithm.
///
/// By convention `gcd(0, 0)` is the constant polynomial 1.
///
/// # Errors
///
/// Propagates coefficient inversion failures, which only occur when the
/// coefficient type does not satisfy the field axioms.
pub fn poly_gcd<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>> {
    if f.is_zero() && g.is_zero() {
        return Ok(f.one());
    }

    let mut p = f.clone();
    let mut q = g.clone();

    while !q.is_zero() {
        tracing::trace!(deg_p = ?p.degree(), deg_q = ?q.degree(), "euclidean step");
        let (_, r) = poly_div_rem(&p, &q)?;
        p = q;
        q = r;
    }

    p.monic()
}

/// Extended polynomial GCD.
///
/// Computes `(gcd, s, t)` such that `s * f + t * g == gcd`, with `gcd` monic.
/// For `f == g == 0` the result is `(0, 1, 0)`, which satisfies the identity.
///
/// # Errors
///
/// Propagates coefficient inversion failures, which only occur when the
/// coefficient type does not satisfy the field axioms.
///
/// # Example
///
/// ```
/// use ansatz_poly::algorithms::gcd::poly_extended_gcd;
/// use ansatz_poly::Polynomial;
/// use ansatz_rings::{IntegralDomain, Q};
///
/// let zero = Q::from_integer(0);
/// let a = Polynomial::from_coeffs(&zero, [-1, 0, 1].map(Q::from_integer)); // x² - 1
/// let b = Polynomial::from_coeffs(&zero, [-1, 1].map(Q::from_integer)); // x - 1
///
/// let (gcd, s, t) = poly_extended_gcd(&a, &b).unwrap();
/// assert_eq!(gcd, b);
/// assert_eq!(s.mul(&a).add(&t.mul(&b)), gcd);
/// ```
pub fn poly_extended_gcd<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>, Polynomial<F>)> {
    let mut old_r = f.clone();
    let mut r = g.clone();
    let mut old_s = f.one();
    let mut s = f.zero();
    let mut old_t = f.zero();
    let mut t = f.one();

    while !r.is_zero() {
        tracing::trace!(deg_r = ?r.degree(), "extended euclidean step");
        let (q, rem) = poly_div_rem(&old_r, &r)?;

        let new_s = old_s.sub(&q.mul(&s));
        let new_t = old_t.sub(&q.mul(&t));

        old_r = std::mem::replace(&mut r, rem);
        old_s = std::mem::replace(&mut s, new_s);
        old_t = std::mem::replace(&mut t, new_t);
    }

    if old_r.is_zero() {
        return Ok((old_r, old_s, old_t));
    }

    // Make the gcd monic and adjust s, t accordingly
    let lead_inv = old_r.leading_coeff().inv()?;
    Ok((
        old_r.scale(&lead_inv),
        old_s.scale(&lead_inv),
        old_t.scale(&lead_inv),
    ))
}

/// Half-extended polynomial GCD.
///
/// Computes `(gcd, s)` such that `s * f ≡ gcd (mod g)`, with `gcd` monic.
/// Only the coefficient of `f` is tracked, which is all that is needed to
/// invert `f` modulo an irreducible `g`: there the gcd is 1 and `s` is the
/// inverse.
///
/// # Errors
///
/// Propagates coefficient inversion failures, which only occur when the
/// coefficient type does not satisfy the field axioms.
pub fn poly_half_extended_gcd<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>)> {
    let mut old_r = f.clone();
    let mut r = g.clone();
    let mut old_s = f.one();
    let mut s = f.zero();

    while !r.is_zero() {
        tracing::trace!(deg_r = ?r.degree(), "half-extended euclidean step");
        let (q, rem) = poly_div_rem(&old_r, &r)?;
        let new_s = old_s.sub(&q.mul(&s));

        old_r = std::mem::replace(&mut r, rem);
        old_s = std::mem::replace(&mut s, new_s);
    }

    if old_r.is_zero() {
        return Ok((old_r, old_s));
    }

    let lead_inv = old_r.leading_coeff().inv()?;
    Ok((old_r.scale(&lead_inv), old_s.scale(&lead_inv)))
}
