//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P(x)/Q(x), kept in
//! canonical form:
//! - numerator and denominator are coprime
//! - the numerator is monic, or zero
//! - zero is represented as 0/1
//!
//! Fixing the numerator (rather than the denominator) as the monic side
//! means a constant c ≠ 0 is stored as 1/c⁻¹.

use std::fmt;

use ansatz_poly::{poly_div_rem, poly_gcd, Polynomial};
use ansatz_rings::{AlgebraError, Field, IntegralDomain, Result};

/// A rational function P(x)/Q(x) over a field F.
///
/// # Invariants
///
/// - `den` is never zero
/// - `gcd(num, den) == 1`
/// - `num` is monic, or `num == 0` and `den == 1`
///
/// Negation is the one operation that bypasses normalization: it negates
/// the denominator only, so the numerator stays monic.
///
/// # Example
///
/// ```
/// use ansatz_poly::Polynomial;
/// use ansatz_rational_func::RationalFunction;
/// use ansatz_rings::Q;
///
/// let zero = Q::from_integer(0);
/// // (x + 1) / (x^2 - 1) = 1 / (x - 1)
/// let num = Polynomial::from_coeffs(&zero, [1, 1].map(Q::from_integer));
/// let den = Polynomial::from_coeffs(&zero, [-1, 0, 1].map(Q::from_integer));
/// let f = RationalFunction::new(num, den).unwrap();
/// assert_eq!(f.denominator(), &Polynomial::from_coeffs(&zero, [-1, 1].map(Q::from_integer)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RationalFunction<F: Field> {
    num: Polynomial<F>,
    den: Polynomial<F>,
}

impl<F: Field> RationalFunction<F> {
    /// Creates `num / den` in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDenominator`] if `den` is zero.
    pub fn new(num: Polynomial<F>, den: Polynomial<F>) -> Result<Self> {
        if den.is_zero() {
            return Err(AlgebraError::ZeroDenominator);
        }

        let gcd = poly_gcd(&num, &den)?;
        let (num, _) = poly_div_rem(&num, &gcd)?;
        let (den, _) = poly_div_rem(&den, &gcd)?;

        if num.is_zero() {
            let den = den.one();
            return Ok(Self { num, den });
        }

        let lead_inv = num.leading_coeff().inv()?;
        Ok(Self {
            num: num.scale(&lead_inv),
            den: den.scale(&lead_inv),
        })
    }

    /// Normalizes a quotient whose denominator is known to be nonzero.
    pub(crate) fn normalized(num: Polynomial<F>, den: Polynomial<F>) -> Self {
        Self::new(num, den).expect("denominator is nonzero")
    }

    /// Creates the rational function p / 1, normalized.
    pub fn from_poly(p: Polynomial<F>) -> Self {
        let den = p.one();
        Self::normalized(p, den)
    }

    /// Creates a constant rational function.
    pub fn constant(c: F) -> Self {
        Self::from_poly(Polynomial::constant(c))
    }

    /// Creates the rational function x.
    pub fn x(witness: &F) -> Self {
        Self::from_poly(Polynomial::x(witness))
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &Polynomial<F> {
        &self.num
    }

    /// Returns the denominator.
    pub fn denominator(&self) -> &Polynomial<F> {
        &self.den
    }

    /// Returns true if the denominator is constant.
    pub fn is_polynomial(&self) -> bool {
        self.den.is_constant()
    }

    /// Returns the polynomial this function equals, if it is one.
    pub fn to_polynomial(&self) -> Option<Polynomial<F>> {
        if !self.is_polynomial() {
            return None;
        }
        let inv = self.den.leading_coeff().inv().ok()?;
        Some(self.num.scale(&inv))
    }

    /// Evaluates at a point, or returns `None` at a pole.
    pub fn eval(&self, x: &F) -> Option<F> {
        let den = self.den.eval(x);
        if den.is_zero() {
            return None;
        }
        self.num.eval(x).div(&den).ok()
    }

    /// Raw constructor for operations that are known to preserve the
    /// invariants.
    pub(crate) fn from_parts(num: Polynomial<F>, den: Polynomial<F>) -> Self {
        Self { num, den }
    }
}

impl<F: Field + fmt::Display> fmt::Display for RationalFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "({})/({})", self.num, self.den)
        }
    }
}
