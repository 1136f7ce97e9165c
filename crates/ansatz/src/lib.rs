//! # Ansatz
//!
//! An exact symbolic-algebra core written in Rust.
//!
//! Ansatz builds a small tower of generic algebraic structures over any
//! caller-supplied field, all in a single formal variable:
//!
//! - **Contracts**: [`IntegralDomain`](rings::IntegralDomain) and
//!   [`Field`](rings::Field), with exact rationals [`Q`](rings::Q) as the
//!   reference base field
//! - **Polynomials**: sparse arithmetic, division with remainder,
//!   (half-)extended Euclidean GCD, re-expansion about a point
//! - **Power series**: lazily evaluated, memoized, with inversion by
//!   recurrence, and Laurent series on top
//! - **Rational functions**: canonical P(x)/Q(x) and their Laurent expansion
//! - **Algebraic numbers**: arithmetic in F[x]/(m(x))
//! - **Fractions**: the generic field of fractions of an integral domain
//!
//! ## Quick Start
//!
//! ```
//! use ansatz::prelude::*;
//!
//! let zero = Q::from_integer(0);
//! let poly = |c: [i64; 3]| Polynomial::from_coeffs(&zero, c.map(Q::from_integer));
//!
//! // (x^2 - 2) / (x^2 - 1) has a simple pole at x = 1 with residue -1/2
//! let f = RationalFunction::new(poly([-2, 0, 1]), poly([-1, 0, 1])).unwrap();
//! let series = f.to_laurent_series(&Q::from_integer(1)).unwrap();
//! assert_eq!(series.valuation(), -1);
//! assert_eq!(series.residue(), Q::new(-1, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ansatz_algebraic as algebraic;
pub use ansatz_poly as poly;
pub use ansatz_rational_func as rational_func;
pub use ansatz_rings as rings;
pub use ansatz_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ansatz_algebraic::AlgebraicNumber;
    pub use ansatz_poly::{
        expand_in_point, poly_div_rem, poly_extended_gcd, poly_gcd, poly_half_extended_gcd,
        Polynomial,
    };
    pub use ansatz_rational_func::RationalFunction;
    pub use ansatz_rings::{AlgebraError, Field, IntegralDomain, QuotientField, Q, Z};
    pub use ansatz_series::{ExtendedPowerSeries, PowerSeries, SeriesCoeff, MAX_TERMS};
}
