//! Laurent series with finitely many negative powers.
//!
//! An [`ExtendedPowerSeries`] stores a power series `main` together with an
//! integer `power` and denotes
//!
//! f(x) = x^(-power) · main(x)
//!
//! so its valuation is `-power`. The representation is kept normalized:
//! whenever the order of `main` can be found within the probe window, its
//! leading zero coefficients are shifted out and absorbed into `power`, so
//! that `main` has a nonzero constant term.

use std::fmt;

use ansatz_rings::{AlgebraError, Field, IntegralDomain, Result};

use crate::power_series::{PowerSeries, SeriesCoeff};

/// A Laurent series x^(-power) · main(x).
///
/// # Invariants
///
/// - if the order of `main` is found within [`MAX_TERMS`](crate::MAX_TERMS),
///   `main` has a nonzero constant term
/// - otherwise `power` is zero
#[derive(Clone)]
pub struct ExtendedPowerSeries<F: SeriesCoeff> {
    main: PowerSeries<F>,
    power: i64,
}

impl<F: SeriesCoeff> ExtendedPowerSeries<F> {
    /// Creates x^(-power) · main(x), normalizing the representation.
    pub fn new(main: PowerSeries<F>, power: i64) -> Self {
        match main.order() {
            Some(0) => Self { main, power },
            Some(order) => {
                let order = i64::try_from(order).expect("order is below the probe window");
                Self {
                    main: main.shift(-order),
                    power: power - order,
                }
            }
            None => {
                tracing::debug!(power, "series order undetermined; treating as zero");
                Self { main, power: 0 }
            }
        }
    }

    /// Embeds a power series.
    pub fn from_series(main: PowerSeries<F>) -> Self {
        Self::new(main, 0)
    }

    /// Returns the normalized power series part.
    pub fn main_series(&self) -> &PowerSeries<F> {
        &self.main
    }

    /// Returns the exponent `power` in x^(-power) · main(x).
    pub fn power(&self) -> i64 {
        self.power
    }

    /// Returns the index of the lowest term, `-power`.
    pub fn valuation(&self) -> i64 {
        -self.power
    }

    /// Returns the coefficient of xⁱ.
    pub fn coeff(&self, i: i64) -> F {
        i.checked_add(self.power)
            .and_then(|n| usize::try_from(n).ok())
            .map_or_else(|| self.main.witness().clone(), |n| self.main.coeff(n))
    }

    /// Returns the coefficient of x⁻¹.
    pub fn residue(&self) -> F {
        self.coeff(-1)
    }

    /// Returns true if the series has terms of negative degree.
    pub fn has_pole(&self) -> bool {
        self.power > 0
    }

    /// Returns true if the main series is probably zero.
    pub fn is_probable_zero(&self) -> bool {
        self.main.is_probable_zero()
    }

    /// Returns true if the series is probably the constant 1.
    pub fn is_probable_one(&self) -> bool {
        self.power == 0 && self.main.is_probable_one()
    }

    /// Aligns both operands to the larger power and combines the main parts.
    fn aligned(
        &self,
        other: &Self,
        op: impl FnOnce(&PowerSeries<F>, &PowerSeries<F>) -> PowerSeries<F>,
    ) -> Self {
        let power = self.power.max(other.power);
        let lhs = self.main.shift(power - self.power);
        let rhs = other.main.shift(power - other.power);
        Self::new(op(&lhs, &rhs), power)
    }
}

impl<F: SeriesCoeff> PartialEq for ExtendedPowerSeries<F> {
    /// Probable equality: equal powers and main series agreeing within the
    /// probe window.
    fn eq(&self, other: &Self) -> bool {
        self.power == other.power && self.main == other.main
    }
}

impl<F: SeriesCoeff> fmt::Debug for ExtendedPowerSeries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPowerSeries")
            .field("power", &self.power)
            .field("main", &self.main)
            .finish()
    }
}

impl<F: SeriesCoeff + fmt::Display> fmt::Display for ExtendedPowerSeries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power == 0 {
            write!(f, "{}", self.main)
        } else {
            write!(f, "x^{} * ({})", -self.power, self.main)
        }
    }
}

impl<F: SeriesCoeff> IntegralDomain for ExtendedPowerSeries<F> {
    fn zero(&self) -> Self {
        Self::from_series(self.main.zero())
    }

    fn one(&self) -> Self {
        Self::from_series(self.main.one())
    }

    fn neg_one(&self) -> Self {
        Self::from_series(self.main.neg_one())
    }

    fn add(&self, rhs: &Self) -> Self {
        self.aligned(rhs, |a, b| a.add(b))
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.aligned(rhs, |a, b| a.sub(b))
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::new(self.main.mul(&rhs.main), self.power + rhs.power)
    }

    fn neg(&self) -> Self {
        Self {
            main: self.main.neg(),
            power: self.power,
        }
    }

    /// Always false; see [`ExtendedPowerSeries::is_probable_zero`].
    fn is_zero(&self) -> bool {
        self.main.is_zero()
    }

    /// Always false; see [`ExtendedPowerSeries::is_probable_one`].
    fn is_one(&self) -> bool {
        self.main.is_one()
    }

    fn try_is_zero(&self) -> Result<bool> {
        self.main.try_is_zero()
    }

    fn try_is_one(&self) -> Result<bool> {
        self.main.try_is_one()
    }
}

impl<F: SeriesCoeff> Field for ExtendedPowerSeries<F> {
    /// x^(-power) · main inverts to x^(power) · main⁻¹.
    ///
    /// Fails with [`AlgebraError::NotInvertible`] when the normalized main
    /// series has a zero constant term, which only happens for a series
    /// that is zero within the probe window.
    fn inv(&self) -> Result<Self> {
        if !self.main.is_invertible() {
            return Err(AlgebraError::NotInvertible("Laurent series that is zero within the probe window"));
        }
        Ok(Self::new(self.main.inv()?, -self.power))
    }
}

impl<F: SeriesCoeff> std::ops::Add for ExtendedPowerSeries<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        IntegralDomain::add(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Sub for ExtendedPowerSeries<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        IntegralDomain::sub(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Mul for ExtendedPowerSeries<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        IntegralDomain::mul(&self, &rhs)
    }
}

impl<F: SeriesCoeff> std::ops::Neg for ExtendedPowerSeries<F> {
    type Output = Self;

    fn neg(self) -> Self {
        IntegralDomain::neg(&self)
    }
}
