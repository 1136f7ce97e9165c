//! Sparse univariate polynomials.
//!
//! A polynomial Σ cᵢxⁱ is stored as a map from exponent to coefficient.
//! The map is kept canonical: an exponent whose coefficient is zero is never
//! present, so the zero polynomial is the empty map and structural equality
//! is mathematical equality.

use std::collections::BTreeMap;
use std::fmt;

use ansatz_rings::{Field, IntegralDomain, Result};

/// A sparse univariate polynomial over an integral domain `F`.
///
/// Each polynomial carries a witness element of `F`, used to manufacture the
/// coefficient identities (a coefficient absent from the map reads as the
/// witness's zero).
///
/// # Invariants
///
/// - No coefficient stored in `terms` is zero
#[derive(Clone, Debug)]
pub struct Polynomial<F: IntegralDomain> {
    terms: BTreeMap<usize, F>,
    witness: F,
}

impl<F: IntegralDomain> Polynomial<F> {
    /// Creates a polynomial from dense coefficients in ascending degree order.
    ///
    /// `witness` is any element of the coefficient structure.
    pub fn from_coeffs(witness: &F, coeffs: impl IntoIterator<Item = F>) -> Self {
        let terms = coeffs
            .into_iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .collect();
        Self {
            terms,
            witness: witness.zero(),
        }
    }

    /// Creates a polynomial from sparse `(exponent, coefficient)` pairs.
    ///
    /// Repeated exponents are summed.
    pub fn from_terms(witness: &F, terms: impl IntoIterator<Item = (usize, F)>) -> Self {
        let mut poly = Self::new_zero(witness);
        for (exp, c) in terms {
            poly.accumulate(exp, &c);
        }
        poly
    }

    /// Creates the zero polynomial.
    pub fn new_zero(witness: &F) -> Self {
        Self {
            terms: BTreeMap::new(),
            witness: witness.zero(),
        }
    }

    /// Creates the constant polynomial 1.
    pub fn new_one(witness: &F) -> Self {
        Self::constant(witness.one())
    }

    /// Creates the constant polynomial -1.
    pub fn new_neg_one(witness: &F) -> Self {
        Self::constant(witness.neg_one())
    }

    /// Creates a constant polynomial.
    pub fn constant(c: F) -> Self {
        Self::monomial(0, c)
    }

    /// Creates the polynomial x.
    pub fn x(witness: &F) -> Self {
        Self::monomial(1, witness.one())
    }

    /// Creates the monomial `coef * x^exponent`.
    pub fn monomial(exponent: usize, coef: F) -> Self {
        let mut poly = Self::new_zero(&coef);
        if !coef.is_zero() {
            poly.terms.insert(exponent, coef);
        }
        poly
    }

    /// Creates the linear polynomial `c0 + c1 * x`.
    pub fn linear(c0: F, c1: F) -> Self {
        let mut poly = Self::new_zero(&c0);
        if !c0.is_zero() {
            poly.terms.insert(0, c0);
        }
        if !c1.is_zero() {
            poly.terms.insert(1, c1);
        }
        poly
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> F {
        self.terms
            .get(&i)
            .cloned()
            .unwrap_or_else(|| self.witness.clone())
    }

    /// Returns the leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> F {
        self.terms
            .values()
            .next_back()
            .cloned()
            .unwrap_or_else(|| self.witness.clone())
    }

    /// Returns the nonzero terms in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &F)> {
        self.terms.iter().map(|(&e, c)| (e, c))
    }

    /// Returns the number of nonzero terms.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the zero of the coefficient structure.
    #[must_use]
    pub fn witness(&self) -> &F {
        &self.witness
    }

    /// Returns true if the polynomial has degree 0 or is zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.degree().map_or(true, |d| d == 0)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        if c.is_zero() {
            return self.zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(&e, x)| (e, x.mul(c)))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            witness: self.witness.clone(),
        }
    }

    /// Multiplies by the monomial `c * x^n`.
    #[must_use]
    pub fn mul_term(&self, n: usize, c: &F) -> Self {
        if c.is_zero() {
            return self.zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(&e, x)| (e + n, x.mul(c)))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            witness: self.witness.clone(),
        }
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Only stored terms are visited; a gap between exponents costs one
    /// power of `x`.
    #[must_use]
    pub fn eval(&self, x: &F) -> F {
        let mut terms = self.terms.iter().rev();
        let Some((&top, lead)) = terms.next() else {
            return self.witness.clone();
        };
        let mut result = lead.clone();
        let mut prev = top;
        for (&exp, c) in terms {
            result = result.mul(&x.pow_unsigned((prev - exp) as u64)).add(c);
            prev = exp;
        }
        result.mul(&x.pow_unsigned(prev as u64))
    }

    /// Adds `c` to the coefficient of x^exp, dropping the term if it cancels.
    fn accumulate(&mut self, exp: usize, c: &F) {
        let sum = match self.terms.get(&exp) {
            Some(existing) => existing.add(c),
            None => c.clone(),
        };
        if sum.is_zero() {
            self.terms.remove(&exp);
        } else {
            self.terms.insert(exp, sum);
        }
    }
}

impl<F: Field> Polynomial<F> {
    /// Scales the polynomial so its leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates a failure to invert the leading coefficient, which only
    /// happens when `F` does not satisfy the field axioms.
    pub fn monic(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        let lead_inv = self.leading_coeff().inv()?;
        Ok(self.scale(&lead_inv))
    }

    /// Returns true if the leading coefficient is one.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        !self.is_zero() && self.leading_coeff().is_one()
    }
}

impl<F: IntegralDomain> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<F: IntegralDomain> IntegralDomain for Polynomial<F> {
    fn zero(&self) -> Self {
        Self::new_zero(&self.witness)
    }

    fn one(&self) -> Self {
        Self::new_one(&self.witness)
    }

    fn neg_one(&self) -> Self {
        Self::new_neg_one(&self.witness)
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        for (&e, c) in &rhs.terms {
            result.accumulate(e, c);
        }
        result
    }

    fn sub(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        for (&e, c) in &rhs.terms {
            result.accumulate(e, &c.neg());
        }
        result
    }

    /// Full convolution: every pair of terms contributes to exponent `i + j`.
    fn mul(&self, rhs: &Self) -> Self {
        let mut result = self.zero();
        for (&i, a) in &self.terms {
            for (&j, b) in &rhs.terms {
                result.accumulate(i + j, &a.mul(b));
            }
        }
        result
    }

    fn neg(&self) -> Self {
        self.scale(&self.witness.neg_one())
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms.get(&0).is_some_and(|c| c.is_one())
    }
}

impl<F: IntegralDomain + fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .terms
            .iter()
            .map(|(&i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

impl<F: IntegralDomain> std::ops::Add for Polynomial<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        IntegralDomain::add(&self, &rhs)
    }
}

impl<F: IntegralDomain> std::ops::Sub for Polynomial<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        IntegralDomain::sub(&self, &rhs)
    }
}

impl<F: IntegralDomain> std::ops::Mul for Polynomial<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        IntegralDomain::mul(&self, &rhs)
    }
}

impl<F: IntegralDomain> std::ops::Neg for Polynomial<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        IntegralDomain::neg(&self)
    }
}
