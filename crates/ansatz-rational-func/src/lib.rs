//! # ansatz-rational-func
//!
//! Rational functions P(x)/Q(x) over a field.
//!
//! This crate provides:
//! - [`RationalFunction`]: canonical quotients of polynomials forming a field
//! - Arithmetic (add, sub, mul, div) with automatic renormalization
//! - Laurent expansion about a point via
//!   [`RationalFunction::to_laurent_series`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod expansion;
mod rational_func;

#[cfg(test)]
mod proptests;

pub use rational_func::RationalFunction;
