//! # ansatz-rings
//!
//! Algebraic structures for the Ansatz algebra core.
//!
//! This crate provides:
//! - Capability contracts: [`IntegralDomain`], [`Field`]
//! - The error taxonomy shared by every layer: [`AlgebraError`]
//! - Concrete base structures: [`Z`] (integers), [`Q`] (exact rationals)
//! - The generic field of fractions [`QuotientField`]
//!
//! ## Trait Hierarchy
//!
//! ```text
//! IntegralDomain        (Z, Polynomial<F>, PowerSeries<F>)
//!  └── Field            (Q, QuotientField<D>, RationalFunction<F>,
//!                        ExtendedPowerSeries<F>, AlgebraicNumber<F>)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integers;
pub mod quotient_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{AlgebraError, Result};
pub use integers::Z;
pub use quotient_field::QuotientField;
pub use rationals::Q;
pub use traits::{Field, IntegralDomain};
