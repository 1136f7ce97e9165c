//! Algebraic numbers over a generic field.
//!
//! An algebraic number is a residue class in F[x]/(m(x)), where `m` is the
//! minimal polynomial. Elements are stored as their reduced representative
//! of degree below `deg(m)`, together with a shared handle to `m`.

use std::fmt;
use std::sync::Arc;

use ansatz_poly::{poly_div_rem, poly_half_extended_gcd, Polynomial};
use ansatz_rings::{AlgebraError, Field, IntegralDomain, Result};

/// An element of the extension F[x]/(m(x)).
///
/// # Invariants
///
/// - `min_poly` is monic and nonzero
/// - `deg(number) < deg(min_poly)`
///
/// The field axioms hold only when `min_poly` is irreducible. This is not
/// checked; [`Field::inv`] trusts it and [`AlgebraicNumber::checked_inv`]
/// verifies invertibility instead.
///
/// # Example
///
/// ```
/// use ansatz_algebraic::AlgebraicNumber;
/// use ansatz_poly::Polynomial;
/// use ansatz_rings::{Field, IntegralDomain, Q};
///
/// let zero = Q::from_integer(0);
/// // α² = 2
/// let m = Polynomial::from_coeffs(&zero, [-2, 0, 1].map(Q::from_integer));
/// let alpha = AlgebraicNumber::generator(m).unwrap();
/// assert_eq!(alpha.mul(&alpha), alpha.one().add(&alpha.one()));
///
/// let a = alpha.add(&alpha.one());
/// assert!(a.mul(&a.inv().unwrap()).is_one());
/// ```
#[derive(Clone, Debug)]
pub struct AlgebraicNumber<F: Field> {
    min_poly: Arc<Polynomial<F>>,
    number: Polynomial<F>,
}

impl<F: Field> AlgebraicNumber<F> {
    /// Creates the class of `number` modulo `min_poly`.
    ///
    /// `min_poly` is made monic and `number` is reduced.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidModulus`] if `min_poly` is zero.
    pub fn new(number: Polynomial<F>, min_poly: Polynomial<F>) -> Result<Self> {
        if min_poly.is_zero() {
            return Err(AlgebraError::InvalidModulus);
        }
        let min_poly = Arc::new(min_poly.monic()?);
        Ok(Self::with_modulus(number, min_poly))
    }

    /// Returns the class of x, a root of `min_poly`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidModulus`] if `min_poly` is zero.
    pub fn generator(min_poly: Polynomial<F>) -> Result<Self> {
        let x = Polynomial::x(min_poly.witness());
        Self::new(x, min_poly)
    }

    /// Embeds an element of the base field.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidModulus`] if `min_poly` is zero.
    pub fn from_base(c: F, min_poly: Polynomial<F>) -> Result<Self> {
        Self::new(Polynomial::constant(c), min_poly)
    }

    /// Reduces `number` modulo an already validated minimal polynomial.
    fn with_modulus(number: Polynomial<F>, min_poly: Arc<Polynomial<F>>) -> Self {
        let (_, number) = poly_div_rem(&number, &min_poly).expect("minimal polynomial is nonzero");
        Self { min_poly, number }
    }

    /// Creates another element of the same extension.
    fn sibling(&self, number: Polynomial<F>) -> Self {
        Self::with_modulus(number, Arc::clone(&self.min_poly))
    }

    /// Returns the minimal polynomial.
    pub fn min_poly(&self) -> &Polynomial<F> {
        &self.min_poly
    }

    /// Returns the reduced representative.
    pub fn number(&self) -> &Polynomial<F> {
        &self.number
    }

    /// Returns the degree of the extension.
    pub fn extension_degree(&self) -> usize {
        self.min_poly.degree().unwrap_or(0)
    }

    /// Returns true if both numbers live in the same extension.
    pub fn same_extension(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.min_poly, &other.min_poly) || self.min_poly == other.min_poly
    }

    fn check_extension(&self, other: &Self) -> Result<()> {
        if self.same_extension(other) {
            Ok(())
        } else {
            tracing::debug!(
                lhs = ?self.min_poly.degree(),
                rhs = ?other.min_poly.degree(),
                "rejecting operands from different extensions"
            );
            Err(AlgebraError::DifferentExtensions)
        }
    }

    /// Adds two numbers of the same extension.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DifferentExtensions`] if the minimal
    /// polynomials differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_extension(other)?;
        Ok(self.sibling(self.number.add(&other.number)))
    }

    /// Subtracts two numbers of the same extension.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DifferentExtensions`] if the minimal
    /// polynomials differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_extension(other)?;
        Ok(self.sibling(self.number.sub(&other.number)))
    }

    /// Multiplies two numbers of the same extension.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DifferentExtensions`] if the minimal
    /// polynomials differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_extension(other)?;
        Ok(self.sibling(self.number.mul(&other.number)))
    }

    /// Inverts the number, verifying that it is a unit of F[x]/(m).
    ///
    /// Unlike [`Field::inv`] this does not assume `m` irreducible.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] if `gcd(number, m) != 1`.
    pub fn checked_inv(&self) -> Result<Self> {
        let (gcd, s) = poly_half_extended_gcd(&self.number, &self.min_poly)?;
        if !gcd.is_one() {
            tracing::debug!(gcd_degree = ?gcd.degree(), "number shares a factor with its minimal polynomial");
            return Err(AlgebraError::NotInvertible("algebraic number sharing a factor with its minimal polynomial"));
        }
        Ok(self.sibling(s))
    }
}

impl<F: Field> PartialEq for AlgebraicNumber<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_extension(other) && self.number == other.number
    }
}

impl<F: Field> IntegralDomain for AlgebraicNumber<F> {
    fn zero(&self) -> Self {
        self.sibling(self.number.zero())
    }

    fn one(&self) -> Self {
        self.sibling(self.number.one())
    }

    fn neg_one(&self) -> Self {
        self.sibling(self.number.neg_one())
    }

    /// # Panics
    ///
    /// Panics if the operands belong to different extensions; see
    /// [`AlgebraicNumber::try_add`].
    fn add(&self, rhs: &Self) -> Self {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the operands belong to different extensions.
    fn sub(&self, rhs: &Self) -> Self {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the operands belong to different extensions.
    fn mul(&self, rhs: &Self) -> Self {
        self.try_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }

    fn neg(&self) -> Self {
        Self {
            min_poly: Arc::clone(&self.min_poly),
            number: self.number.neg(),
        }
    }

    fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    fn is_one(&self) -> bool {
        self.number.is_one()
    }
}

impl<F: Field> Field for AlgebraicNumber<F> {
    /// Inverts via the half-extended GCD of the representative and the
    /// minimal polynomial, assuming the latter is irreducible.
    fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(AlgebraError::NotInvertible("zero algebraic number"));
        }
        let (_, s) = poly_half_extended_gcd(&self.number, &self.min_poly)?;
        Ok(self.sibling(s))
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_extension(rhs)?;
        if rhs.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        self.try_mul(&rhs.inv()?)
    }
}

impl<F: Field + fmt::Display> fmt::Display for AlgebraicNumber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.number.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .number
            .terms()
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}*α"),
                _ => format!("{c}*α^{i}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
