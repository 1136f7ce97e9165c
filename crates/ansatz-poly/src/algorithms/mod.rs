//! Polynomial algorithms over a coefficient field.
//!
//! This module contains:
//! - Euclidean division with remainder and Taylor expansion at a point
//! - Polynomial GCD, extended GCD and half-extended GCD

pub mod division;
pub mod gcd;
