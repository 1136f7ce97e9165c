//! Arithmetic operations on power series.
//!
//! Every operation builds a new node referring to its operands; nothing is
//! evaluated until a coefficient is requested.

use ansatz_rings::{AlgebraError, IntegralDomain, Result};
use rustc_hash::FxHashMap;

use crate::power_series::{PowerSeries, SeriesCoeff, SeriesKind};

impl<F: SeriesCoeff> PowerSeries<F> {
    /// Adds a constant to the series.
    #[must_use]
    pub fn add_scalar(&self, c: &F) -> Self {
        Self::from_kind(SeriesKind::AddScalar(self.clone(), c.clone()), self.witness())
    }

    /// Subtracts a constant from the series.
    #[must_use]
    pub fn sub_scalar(&self, c: &F) -> Self {
        self.add_scalar(&c.neg())
    }

    /// Multiplies every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        Self::from_kind(SeriesKind::Scale(self.clone(), c.clone()), self.witness())
    }

    /// Squares a power series.
    #[must_use]
    pub fn square(&self) -> Self {
        IntegralDomain::mul(self, self)
    }

    /// Computes the multiplicative inverse.
    ///
    /// The coefficients follow the recurrence
    /// b₀ = a₀⁻¹, bₙ = -a₀⁻¹ Σₖ₌₀ⁿ⁻¹ aₙ₋ₖ bₖ,
    /// memoized on the returned series.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] if the constant term is zero.
    pub fn inv(&self) -> Result<Self> {
        let a0 = self.coeff(0);
        if a0.is_zero() {
            return Err(AlgebraError::NotInvertible("power series with zero constant term"));
        }
        let lead_inv = a0.inv()?;

        let mut cache = FxHashMap::default();
        cache.insert(0, lead_inv.clone());

        Ok(Self::with_cache(
            SeriesKind::Inverse {
                source: self.clone(),
                lead_inv,
            },
            self.witness(),
            cache,
        ))
    }

    /// Divides by another series.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] if the divisor has a zero
    /// constant term.
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(IntegralDomain::mul(self, &other.inv()?))
    }
}

impl<F: SeriesCoeff> PartialEq for PowerSeries<F> {
    /// Probable equality: the first [`MAX_TERMS`](crate::MAX_TERMS)
    /// coefficients agree.
    fn eq(&self, other: &Self) -> bool {
        self.probable_eq_within(other, crate::MAX_TERMS)
    }
}

impl<F: SeriesCoeff> IntegralDomain for PowerSeries<F> {
    fn zero(&self) -> Self {
        Self::new_zero(self.witness())
    }

    fn one(&self) -> Self {
        Self::new_one(self.witness())
    }

    fn neg_one(&self) -> Self {
        Self::new_neg_one(self.witness())
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::from_kind(SeriesKind::Add(self.clone(), rhs.clone()), self.witness())
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::from_kind(SeriesKind::Sub(self.clone(), rhs.clone()), self.witness())
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::from_kind(SeriesKind::Mul(self.clone(), rhs.clone()), self.witness())
    }

    fn neg(&self) -> Self {
        Self::from_kind(SeriesKind::Neg(self.clone()), self.witness())
    }

    /// Always false: zero is not decidable for an infinite series.
    ///
    /// Use [`PowerSeries::is_probable_zero`] for a bounded check.
    fn is_zero(&self) -> bool {
        false
    }

    /// Always false; see [`PowerSeries::is_probable_one`].
    fn is_one(&self) -> bool {
        false
    }

    fn try_is_zero(&self) -> Result<bool> {
        Err(AlgebraError::Undecidable("power series zero test"))
    }

    fn try_is_one(&self) -> Result<bool> {
        Err(AlgebraError::Undecidable("power series one test"))
    }
}

impl<F: SeriesCoeff> std::ops::Add for PowerSeries<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        IntegralDomain::add(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Sub for PowerSeries<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        IntegralDomain::sub(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Mul for PowerSeries<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        IntegralDomain::mul(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Neg for PowerSeries<F> {
    type Output = Self;

    fn neg(self) -> Self {
        IntegralDomain::neg(&self)
    }
}
