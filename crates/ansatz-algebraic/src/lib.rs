//! # ansatz-algebraic
//!
//! Algebraic numbers: residue classes of polynomials modulo a minimal
//! polynomial, forming the extension field F[x]/(m(x)) when `m` is
//! irreducible.
//!
//! Every [`AlgebraicNumber`] carries a shared handle to its minimal
//! polynomial. Combining numbers whose minimal polynomials differ is an
//! error reported by the fallible `try_*` operations as
//! [`AlgebraError::DifferentExtensions`](ansatz_rings::AlgebraError::DifferentExtensions).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebraic_number;

#[cfg(test)]
mod proptests;

pub use algebraic_number::AlgebraicNumber;
