//! The field of rational numbers Q.

use std::fmt;

use dashu::base::Inverse;
use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::error::{AlgebraError, Result};
use crate::traits::{Field, IntegralDomain};

/// The field of rational numbers.
///
/// A thin wrapper around `dashu::rational::RBig`, which keeps every value in
/// lowest terms with a positive denominator. Structural equality is therefore
/// numeric equality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates the rational `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self(RBig::from(IBig::from(num)) / RBig::from(IBig::from(den)))
    }

    /// Creates the rational `num / den`, reporting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDenominator`] if `den` is zero.
    pub fn try_new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(AlgebraError::ZeroDenominator);
        }
        Ok(Self::new(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl IntegralDomain for Q {
    fn zero(&self) -> Self {
        Self(RBig::ZERO)
    }

    fn one(&self) -> Self {
        Self(RBig::ONE)
    }

    fn neg_one(&self) -> Self {
        Self(-RBig::ONE)
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(&self.0 - &rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(&self.0 * &rhs.0)
    }

    fn neg(&self) -> Self {
        Self(-&self.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Field for Q {
    fn inv(&self) -> Result<Self> {
        if IntegralDomain::is_zero(self) {
            return Err(AlgebraError::NotInvertible("zero rational"));
        }
        Ok(Self(self.0.clone().inv()))
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Div for Q {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Field::div`] for a checked division.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
