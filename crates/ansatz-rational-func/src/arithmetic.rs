//! Arithmetic operations for rational functions.
//!
//! Implements the field operations. Every result except negation is
//! renormalized to canonical form.

use ansatz_rings::{AlgebraError, Field, IntegralDomain, Result};

use crate::RationalFunction;

impl<F: Field> IntegralDomain for RationalFunction<F> {
    fn zero(&self) -> Self {
        let zero = self.numerator().zero();
        Self::from_parts(zero, self.numerator().one())
    }

    fn one(&self) -> Self {
        let one = self.numerator().one();
        Self::from_parts(one.clone(), one)
    }

    fn neg_one(&self) -> Self {
        self.one().neg()
    }

    /// a/b + c/d = (ad + cb) / bd
    fn add(&self, rhs: &Self) -> Self {
        let num = self
            .numerator()
            .mul(rhs.denominator())
            .add(&rhs.numerator().mul(self.denominator()));
        Self::normalized(num, self.denominator().mul(rhs.denominator()))
    }

    fn sub(&self, rhs: &Self) -> Self {
        let num = self
            .numerator()
            .mul(rhs.denominator())
            .sub(&rhs.numerator().mul(self.denominator()));
        Self::normalized(num, self.denominator().mul(rhs.denominator()))
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::normalized(
            self.numerator().mul(rhs.numerator()),
            self.denominator().mul(rhs.denominator()),
        )
    }

    /// Negates the denominator, leaving the monic numerator untouched.
    ///
    /// Zero is its own negation, so 0/1 is kept as is.
    fn neg(&self) -> Self {
        if self.numerator().is_zero() {
            return self.clone();
        }
        Self::from_parts(self.numerator().clone(), self.denominator().neg())
    }

    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator().is_one() && self.denominator().is_one()
    }
}

impl<F: Field> Field for RationalFunction<F> {
    fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(AlgebraError::NotInvertible("zero rational function"));
        }
        Ok(Self::normalized(self.denominator().clone(), self.numerator().clone()))
    }

    /// (a/b) / (c/d) = ad / bc
    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::normalized(
            self.numerator().mul(rhs.denominator()),
            self.denominator().mul(rhs.numerator()),
        ))
    }
}

impl<F: Field> std::ops::Add for RationalFunction<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        IntegralDomain::add(&self, &other)
    }
}

impl<F: Field> std::ops::Add<&RationalFunction<F>> for RationalFunction<F> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        IntegralDomain::add(&self, other)
    }
}

impl<F: Field> std::ops::Sub for RationalFunction<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        IntegralDomain::sub(&self, &other)
    }
}

impl<F: Field> std::ops::Mul for RationalFunction<F> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        IntegralDomain::mul(&self, &other)
    }
}

impl<F: Field> std::ops::Mul<&RationalFunction<F>> for RationalFunction<F> {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        IntegralDomain::mul(&self, other)
    }
}

impl<F: Field> std::ops::Div for RationalFunction<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `other` is zero; use [`Field::div`] to handle that case.
    fn div(self, other: Self) -> Self::Output {
        Field::div(&self, &other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<F: Field> std::ops::Neg for RationalFunction<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        IntegralDomain::neg(&self)
    }
}
