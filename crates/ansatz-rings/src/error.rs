//! Errors raised by algebraic operations.
//!
//! Every error here is a violated algebraic precondition. None of them is
//! transient, so there is no retry path: callers are expected to check
//! (for instance with `is_zero`) before inverting.

use thiserror::Error;

/// Errors that can occur in algebraic operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A fraction was constructed with a zero denominator.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// Division by a zero element or by the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,

    /// Two algebraic numbers from unrelated extension fields were combined.
    #[error("different extensions")]
    DifferentExtensions,

    /// A modulus (minimal polynomial) was zero.
    #[error("minimal polynomial must be nonzero")]
    InvalidModulus,

    /// The element has no multiplicative inverse.
    #[error("{0} is not invertible")]
    NotInvertible(&'static str),

    /// The exact predicate cannot be decided for this object.
    #[error("{0} is not decidable for infinite objects; use the bounded probable check")]
    Undecidable(&'static str),
}

/// Result type for algebraic operations.
pub type Result<T> = std::result::Result<T, AlgebraError>;
