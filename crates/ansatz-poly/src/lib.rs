//! # ansatz-poly
//!
//! Univariate polynomial arithmetic for the Ansatz algebra core.
//!
//! This crate provides:
//! - [`Polynomial`]: sparse polynomials over any [`IntegralDomain`](ansatz_rings::IntegralDomain)
//! - Euclidean division and expansion around a point ([`algorithms::division`])
//! - Polynomial GCD, extended and half-extended GCD ([`algorithms::gcd`])
//!
//! Division and the GCD family require field coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use algorithms::division::{expand_in_point, poly_div_rem};
pub use algorithms::gcd::{poly_extended_gcd, poly_gcd, poly_half_extended_gcd};
pub use polynomial::Polynomial;
