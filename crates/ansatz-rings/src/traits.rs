//! Algebraic structure traits.
//!
//! This module defines the two capability contracts every algebraic object
//! in the workspace satisfies. Composite structures (polynomials, series,
//! fractions, extensions) are generic over these traits and implement them
//! in turn, so the tower can be stacked arbitrarily.
//!
//! Identities are produced from a *witness* instance rather than from a
//! static constructor: the zero of an algebraic number depends on its
//! minimal polynomial, which only exists at runtime.

use std::fmt::Debug;

use crate::error::{AlgebraError, Result};

/// An integral domain: a commutative ring with identity and no zero divisors.
///
/// # Laws
///
/// Implementers guarantee the axioms themselves; nothing here verifies them.
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - `a.mul(b).is_zero()` implies `a.is_zero() || b.is_zero()`
pub trait IntegralDomain: Clone + PartialEq + Debug {
    /// The additive identity of the structure `self` belongs to.
    #[must_use]
    fn zero(&self) -> Self;

    /// The multiplicative identity of the structure `self` belongs to.
    #[must_use]
    fn one(&self) -> Self;

    /// The additive inverse of the multiplicative identity, `-1`.
    #[must_use]
    fn neg_one(&self) -> Self;

    /// Returns `self + rhs`.
    #[must_use]
    fn add(&self, rhs: &Self) -> Self;

    /// Returns `self - rhs`.
    #[must_use]
    fn sub(&self, rhs: &Self) -> Self;

    /// Returns `self * rhs`.
    #[must_use]
    fn mul(&self, rhs: &Self) -> Self;

    /// Returns `-self`.
    #[must_use]
    fn neg(&self) -> Self {
        self.mul(&self.neg_one())
    }

    /// Returns true if this is the additive identity.
    ///
    /// Structures for which the question is undecidable answer `false` and
    /// report the problem through [`IntegralDomain::try_is_zero`].
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Decides whether this is the additive identity.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::Undecidable`] for structures where the exact
    /// predicate is not available.
    fn try_is_zero(&self) -> Result<bool> {
        Ok(self.is_zero())
    }

    /// Decides whether this is the multiplicative identity.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::Undecidable`] for structures where the exact
    /// predicate is not available.
    fn try_is_one(&self) -> Result<bool> {
        Ok(self.is_one())
    }

    /// Computes `self^n` for non-negative `n` by binary exponentiation.
    #[must_use]
    fn pow_unsigned(&self, n: u64) -> Self {
        if n == 0 {
            return self.one();
        }
        if n % 2 == 0 {
            return self.mul(self).pow_unsigned(n / 2);
        }
        self.mul(&self.pow_unsigned(n - 1))
    }
}

/// A field: an integral domain where every nonzero element is invertible.
pub trait Field: IntegralDomain {
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] if the element is zero.
    fn inv(&self) -> Result<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.mul(&rhs.inv()?))
    }

    /// Computes `self^p` for any integer `p`, inverting first when `p < 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] if `p < 0` and `self` is zero.
    fn pow(&self, p: i64) -> Result<Self> {
        if p < 0 {
            return Ok(self.inv()?.pow_unsigned(p.unsigned_abs()));
        }
        Ok(self.pow_unsigned(p.unsigned_abs()))
    }
}
