//! The ring of integers Z.
//!
//! Z is the canonical example of an integral domain that is not a field.
//! Its field of fractions, built generically by
//! [`QuotientField`](crate::quotient_field::QuotientField), is isomorphic to
//! [`Q`](crate::rationals::Q).

use std::fmt;

use dashu::integer::IBig;

use crate::traits::IntegralDomain;

/// The ring of integers.
///
/// This is a wrapper around `dashu::integer::IBig`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl IntegralDomain for Z {
    fn zero(&self) -> Self {
        Self(IBig::ZERO)
    }

    fn one(&self) -> Self {
        Self(IBig::ONE)
    }

    fn neg_one(&self) -> Self {
        Self(-IBig::ONE)
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
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z({})", self.0)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
