//! The field of fractions of an integral domain.
//!
//! A general integral domain has no GCD, so fractions are never reduced:
//! `2/4` and `1/2` are stored as given. Equality is decided by
//! cross-multiplication instead, which is sound without a canonical form.

use std::fmt;

use crate::error::{AlgebraError, Result};
use crate::traits::{Field, IntegralDomain};

/// A fraction `num / den` over an integral domain `D`.
///
/// # Invariants
///
/// - `den` is never zero
#[derive(Clone, Debug)]
pub struct QuotientField<D: IntegralDomain> {
    num: D,
    den: D,
}

impl<D: IntegralDomain> QuotientField<D> {
    /// Creates the fraction `num / den` without reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDenominator`] if `den` is zero.
    pub fn new(num: D, den: D) -> Result<Self> {
        if den.is_zero() {
            return Err(AlgebraError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// Embeds an element of the domain as `a / 1`.
    pub fn from_element(a: D) -> Self {
        let den = a.one();
        Self { num: a, den }
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &D {
        &self.num
    }

    /// Returns the denominator.
    pub fn denominator(&self) -> &D {
        &self.den
    }
}

impl<D: IntegralDomain> PartialEq for QuotientField<D> {
    fn eq(&self, other: &Self) -> bool {
        self.num.mul(&other.den) == other.num.mul(&self.den)
    }
}

impl<D: IntegralDomain> IntegralDomain for QuotientField<D> {
    fn zero(&self) -> Self {
        Self {
            num: self.num.zero(),
            den: self.den.one(),
        }
    }

    fn one(&self) -> Self {
        Self {
            num: self.num.one(),
            den: self.den.one(),
        }
    }

    fn neg_one(&self) -> Self {
        Self {
            num: self.num.neg_one(),
            den: self.den.one(),
        }
    }

    // a/b + c/d = (ad + cb) / bd
    fn add(&self, rhs: &Self) -> Self {
        Self {
            num: self.num.mul(&rhs.den).add(&rhs.num.mul(&self.den)),
            den: self.den.mul(&rhs.den),
        }
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self {
            num: self.num.mul(&rhs.den).sub(&rhs.num.mul(&self.den)),
            den: self.den.mul(&rhs.den),
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self {
            num: self.num.mul(&rhs.num),
            den: self.den.mul(&rhs.den),
        }
    }

    fn neg(&self) -> Self {
        Self {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl<D: IntegralDomain> Field for QuotientField<D> {
    fn inv(&self) -> Result<Self> {
        if self.num.is_zero() {
            return Err(AlgebraError::NotInvertible("zero fraction"));
        }
        Ok(Self {
            num: self.den.clone(),
            den: self.num.clone(),
        })
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.num.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self {
            num: self.num.mul(&rhs.den),
            den: self.den.mul(&rhs.num),
        })
    }
}

impl<D: IntegralDomain + fmt::Display> fmt::Display for QuotientField<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})/({})", self.num, self.den)
    }
}
