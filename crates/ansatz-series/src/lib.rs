//! # ansatz-series
//!
//! Lazily evaluated power series and Laurent series.
//!
//! This crate provides:
//! - [`PowerSeries`]: an expression graph of series operations whose
//!   coefficients are computed on demand and memoized per node
//! - [`ExtendedPowerSeries`]: x^(-power) · main(x), a Laurent series with
//!   finitely many negative powers, forming a field
//!
//! ## Bounded decisions
//!
//! Whether an infinite series is zero cannot be decided. The order,
//! zero/one checks and equality inspect only the first [`MAX_TERMS`]
//! coefficients (or a caller-supplied window through the `_within`
//! variants). The exact predicates `is_zero` and `is_one` of
//! [`IntegralDomain`](ansatz_rings::IntegralDomain) always answer false for
//! series, and `try_is_zero` reports
//! [`AlgebraError::Undecidable`](ansatz_rings::AlgebraError::Undecidable).
//!
//! ## Example
//!
//! ```
//! use ansatz_rings::{IntegralDomain, Q};
//! use ansatz_series::PowerSeries;
//!
//! let zero = Q::from_integer(0);
//! // 1 - x
//! let s = PowerSeries::from_coeffs(&zero, vec![Q::from_integer(1), Q::from_integer(-1)]);
//! let geometric = s.inv().unwrap();
//! assert_eq!(geometric.coeff(10), Q::from_integer(1));
//! assert!(s.mul(&geometric).is_probable_one());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod laurent;
pub mod ops;
pub mod power_series;

#[cfg(test)]
mod proptests;

pub use laurent::ExtendedPowerSeries;
pub use power_series::{PowerSeries, SeriesCoeff, MAX_TERMS};
