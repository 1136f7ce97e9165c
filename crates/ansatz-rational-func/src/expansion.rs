//! Laurent expansion of rational functions about a point.

use ansatz_poly::expand_in_point;
use ansatz_rings::{Field, Result};
use ansatz_series::{ExtendedPowerSeries, PowerSeries, SeriesCoeff};

use crate::RationalFunction;

impl<F: SeriesCoeff> RationalFunction<F> {
    /// Expands the function as a Laurent series in `t = x - a`.
    ///
    /// Numerator and denominator are rewritten in powers of `t` and the
    /// expansion is their quotient as [`ExtendedPowerSeries`]. A pole of
    /// order `k` at `a` shows up as valuation `-k`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`](ansatz_rings::AlgebraError::NotInvertible)
    /// only if the denominator expansion vanishes within the probe window,
    /// which cannot happen for a nonzero denominator of degree below
    /// [`MAX_TERMS`](ansatz_series::MAX_TERMS).
    ///
    /// # Example
    ///
    /// ```
    /// use ansatz_poly::Polynomial;
    /// use ansatz_rational_func::RationalFunction;
    /// use ansatz_rings::Q;
    ///
    /// let zero = Q::from_integer(0);
    /// // 1 / (x - 1) about x = 1 is t^-1
    /// let den = Polynomial::from_coeffs(&zero, [-1, 1].map(Q::from_integer));
    /// let f = RationalFunction::new(Polynomial::new_one(&zero), den).unwrap();
    /// let series = f.to_laurent_series(&Q::from_integer(1)).unwrap();
    /// assert_eq!(series.valuation(), -1);
    /// assert_eq!(series.residue(), Q::from_integer(1));
    /// ```
    pub fn to_laurent_series(&self, a: &F) -> Result<ExtendedPowerSeries<F>> {
        let num = expand_in_point(self.numerator(), a);
        let den = expand_in_point(self.denominator(), a);

        tracing::trace!(num_terms = num.num_terms(), den_terms = den.num_terms(), "expanded in point");

        let num = ExtendedPowerSeries::from_series(PowerSeries::from_polynomial(num));
        let den = ExtendedPowerSeries::from_series(PowerSeries::from_polynomial(den));
        num.div(&den)
    }
}
