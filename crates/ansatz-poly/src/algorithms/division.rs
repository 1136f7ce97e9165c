//! Euclidean division of polynomials.

use ansatz_rings::{AlgebraError, Field, IntegralDomain, Result};

use crate::polynomial::Polynomial;

/// Divides polynomial `f` by `g`, returning `(quotient, remainder)`.
///
/// The result satisfies `f == q * g + r` with `r` zero or
/// `deg(r) < deg(g)`. Requires the coefficient ring to be a field.
///
/// # Errors
///
/// Returns [`AlgebraError::DivisionByZero`] if `g` is the zero polynomial.
pub fn poly_div_rem<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>)> {
    let Some(g_deg) = g.degree() else {
        return Err(AlgebraError::DivisionByZero);
    };
    let g_lead = g.leading_coeff();

    let mut quotient = f.zero();
    let mut remainder = f.clone();

    // Each step cancels the leading term, so the remainder degree strictly drops.
    while let Some(r_deg) = remainder.degree().filter(|&d| d >= g_deg) {
        let coeff = remainder.leading_coeff().div(&g_lead)?;
        let shift = r_deg - g_deg;
        remainder = remainder.sub(&g.mul_term(shift, &coeff));
        quotient = quotient.add(&Polynomial::monomial(shift, coeff));
    }

    Ok((quotient, remainder))
}

/// Rewrites `f` in the basis `(x - a)^d`.
///
/// The coefficient of x^d in the returned polynomial is the coefficient of
/// `(x - a)^d` in `f`, obtained by repeated division by `x - a`. This is how
/// a polynomial (and hence a rational function) is expanded around a point.
#[must_use]
pub fn expand_in_point<F: Field>(f: &Polynomial<F>, a: &F) -> Polynomial<F> {
    let linear = Polynomial::linear(a.neg(), a.one());
    let mut digits = Vec::new();
    let mut q = f.clone();

    while !q.is_zero() {
        let (next, r) = poly_div_rem(&q, &linear).expect("x - a is a nonzero divisor");
        digits.push((digits.len(), r.coeff(0)));
        q = next;
    }

    Polynomial::from_terms(f.witness(), digits)
}
