//! Lazily evaluated formal power series.
//!
//! A [`PowerSeries`] is a node in an expression graph: a leaf (a polynomial
//! or a coefficient generator) or an operation over other series. Nodes are
//! shared through `Arc`, and each owns a memo table so a coefficient is
//! computed at most once per node. Building a series never evaluates
//! anything; coefficients are realized on demand by [`PowerSeries::coeff`].
//!
//! Zero tests, order and equality of infinite series cannot be decided.
//! They are answered only within a bounded window of [`MAX_TERMS`]
//! coefficients and the answers are named "probable" accordingly.
//!
//! Dropping a series unlinks its graph iteratively, so chains of any length
//! can be released. Computing a fresh coefficient still recurses once per
//! node on the path to the leaves: a chain built in a loop should be
//! evaluated as it grows, so each step hits the memo of the previous one.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use ansatz_poly::Polynomial;
use ansatz_rings::Field;

/// Number of leading coefficients inspected by bounded-window predicates.
pub const MAX_TERMS: usize = 30;

/// Number of coefficients shown by `Display` and `Debug`.
const DISPLAY_TERMS: usize = 6;

/// Coefficient types usable in power series.
///
/// Series nodes are shared across threads, so coefficients must be
/// `Send + Sync + 'static` in addition to forming a field.
pub trait SeriesCoeff: Field + Send + Sync + 'static {}

impl<T: Field + Send + Sync + 'static> SeriesCoeff for T {}

type Generator<F> = Arc<dyn Fn(usize) -> F + Send + Sync>;

/// How the coefficients of a node are derived.
pub(crate) enum SeriesKind<F: SeriesCoeff> {
    Polynomial(Polynomial<F>),
    Generator(Generator<F>),
    Add(PowerSeries<F>, PowerSeries<F>),
    Sub(PowerSeries<F>, PowerSeries<F>),
    Mul(PowerSeries<F>, PowerSeries<F>),
    Neg(PowerSeries<F>),
    Scale(PowerSeries<F>, F),
    AddScalar(PowerSeries<F>, F),
    Shift(PowerSeries<F>, i64),
    /// Reciprocal of `source`, whose constant term inverts to `lead_inv`.
    Inverse {
        source: PowerSeries<F>,
        lead_inv: F,
    },
}

impl<F: SeriesCoeff> SeriesKind<F> {
    /// Replaces `self` with a leaf and pushes the operand series onto `out`.
    fn take_operands(&mut self, witness: &F, out: &mut Vec<PowerSeries<F>>) {
        let leaf = SeriesKind::Polynomial(Polynomial::new_zero(witness));
        match std::mem::replace(self, leaf) {
            SeriesKind::Polynomial(_) | SeriesKind::Generator(_) => {}
            SeriesKind::Add(a, b) | SeriesKind::Sub(a, b) | SeriesKind::Mul(a, b) => {
                out.push(a);
                out.push(b);
            }
            SeriesKind::Neg(a)
            | SeriesKind::Scale(a, _)
            | SeriesKind::AddScalar(a, _)
            | SeriesKind::Shift(a, _)
            | SeriesKind::Inverse { source: a, .. } => out.push(a),
        }
    }
}

struct SeriesNode<F: SeriesCoeff> {
    kind: SeriesKind<F>,
    cache: RwLock<FxHashMap<usize, F>>,
    witness: F,
}

impl<F: SeriesCoeff> Drop for SeriesNode<F> {
    // The default drop would recurse once per node of a chain.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.take_operands(&self.witness, &mut pending);
        while let Some(series) = pending.pop() {
            // Nodes still shared elsewhere are left to their other owners.
            if let Ok(mut node) = Arc::try_unwrap(series.node) {
                node.kind.take_operands(&node.witness, &mut pending);
            }
        }
    }
}

/// A formal power series Σ aₙxⁿ with lazily computed, memoized coefficients.
///
/// Cloning is cheap and shares the memo table.
pub struct PowerSeries<F: SeriesCoeff> {
    node: Arc<SeriesNode<F>>,
}

impl<F: SeriesCoeff> Clone for PowerSeries<F> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<F: SeriesCoeff> PowerSeries<F> {
    pub(crate) fn from_kind(kind: SeriesKind<F>, witness: &F) -> Self {
        Self::with_cache(kind, witness, FxHashMap::default())
    }

    pub(crate) fn with_cache(kind: SeriesKind<F>, witness: &F, cache: FxHashMap<usize, F>) -> Self {
        Self {
            node: Arc::new(SeriesNode {
                kind,
                cache: RwLock::new(cache),
                witness: witness.zero(),
            }),
        }
    }

    /// Creates the series whose coefficients are those of a polynomial.
    pub fn from_polynomial(p: Polynomial<F>) -> Self {
        let witness = p.witness().clone();
        Self::from_kind(SeriesKind::Polynomial(p), &witness)
    }

    /// Creates a series with finitely many nonzero coefficients.
    pub fn from_coeffs(witness: &F, coeffs: Vec<F>) -> Self {
        Self::from_polynomial(Polynomial::from_coeffs(witness, coeffs))
    }

    /// Creates a series from a generator `n -> aₙ`.
    ///
    /// The generator must be a pure function of `n`; each index is evaluated
    /// at most once per series.
    pub fn from_generator(witness: &F, generator: impl Fn(usize) -> F + Send + Sync + 'static) -> Self {
        Self::from_kind(SeriesKind::Generator(Arc::new(generator)), witness)
    }

    /// Creates a constant series.
    pub fn constant(c: F) -> Self {
        Self::from_polynomial(Polynomial::constant(c))
    }

    /// Creates the zero series.
    pub fn new_zero(witness: &F) -> Self {
        Self::from_polynomial(Polynomial::new_zero(witness))
    }

    /// Creates the series 1.
    pub fn new_one(witness: &F) -> Self {
        Self::from_polynomial(Polynomial::new_one(witness))
    }

    /// Creates the series -1.
    pub fn new_neg_one(witness: &F) -> Self {
        Self::from_polynomial(Polynomial::new_neg_one(witness))
    }

    /// Returns the coefficient of xⁿ, computing and caching it if needed.
    pub fn coeff(&self, n: usize) -> F {
        let cached = self.node.cache.read().get(&n).cloned();
        if let Some(c) = cached {
            return c;
        }

        // The lock is released while computing: inverse nodes read their own
        // lower coefficients during evaluation.
        let c = self.compute(n);
        self.node.cache.write().entry(n).or_insert(c).clone()
    }

    fn compute(&self, n: usize) -> F {
        match &self.node.kind {
            SeriesKind::Polynomial(p) => p.coeff(n),
            SeriesKind::Generator(g) => g(n),
            SeriesKind::Add(a, b) => a.coeff(n).add(&b.coeff(n)),
            SeriesKind::Sub(a, b) => a.coeff(n).sub(&b.coeff(n)),
            SeriesKind::Mul(a, b) => (0..=n).fold(self.node.witness.clone(), |sum, i| {
                sum.add(&a.coeff(i).mul(&b.coeff(n - i)))
            }),
            SeriesKind::Neg(a) => a.coeff(n).neg(),
            SeriesKind::Scale(a, c) => a.coeff(n).mul(c),
            SeriesKind::AddScalar(a, c) => {
                if n == 0 {
                    a.coeff(0).add(c)
                } else {
                    a.coeff(n)
                }
            }
            SeriesKind::Shift(a, s) => shifted_index(n, *s)
                .map_or_else(|| self.node.witness.clone(), |m| a.coeff(m)),
            SeriesKind::Inverse { source, lead_inv } => {
                if n == 0 {
                    return lead_inv.clone();
                }
                // bₙ = -a₀⁻¹ Σₖ₌₀ⁿ⁻¹ aₙ₋ₖ bₖ, reading bₖ from this node's cache in
                // ascending order so recursion depth stays bounded.
                let sum = (0..n).fold(self.node.witness.clone(), |sum, k| {
                    sum.add(&source.coeff(n - k).mul(&self.coeff(k)))
                });
                sum.mul(&lead_inv.neg())
            }
        }
    }

    /// Returns the zero of the coefficient field.
    pub fn witness(&self) -> &F {
        &self.node.witness
    }

    /// Returns how many coefficients have been computed and cached so far.
    pub fn evaluated_count(&self) -> usize {
        self.node.cache.read().len()
    }

    /// Multiplies by `x^s`.
    ///
    /// A negative `s` shifts left, discarding the first `|s|` coefficients.
    #[must_use]
    pub fn shift(&self, s: i64) -> Self {
        if s == 0 {
            return self.clone();
        }
        Self::from_kind(SeriesKind::Shift(self.clone(), s), self.witness())
    }

    /// Returns the index of the first nonzero coefficient within
    /// [`MAX_TERMS`] terms, or `None` if the order is undetermined.
    ///
    /// `None` is not a proof that the series is zero.
    pub fn order(&self) -> Option<usize> {
        self.order_within(MAX_TERMS)
    }

    /// Like [`PowerSeries::order`], inspecting `window` coefficients.
    pub fn order_within(&self, window: usize) -> Option<usize> {
        (0..window).find(|&i| !self.coeff(i).is_zero())
    }

    /// Returns true if the first [`MAX_TERMS`] coefficients are zero.
    pub fn is_probable_zero(&self) -> bool {
        self.is_probable_zero_within(MAX_TERMS)
    }

    /// Returns true if the first `window` coefficients are zero.
    pub fn is_probable_zero_within(&self, window: usize) -> bool {
        self.order_within(window).is_none()
    }

    /// Returns true if the constant term is one and the next
    /// [`MAX_TERMS`]` - 1` coefficients are zero.
    pub fn is_probable_one(&self) -> bool {
        self.is_probable_one_within(MAX_TERMS)
    }

    /// Like [`PowerSeries::is_probable_one`], inspecting `window` coefficients.
    pub fn is_probable_one_within(&self, window: usize) -> bool {
        window > 0 && self.coeff(0).is_one() && (1..window).all(|i| self.coeff(i).is_zero())
    }

    /// Returns true if the first `window` coefficients of both series agree.
    pub fn probable_eq_within(&self, other: &Self, window: usize) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || (0..window).all(|i| self.coeff(i) == other.coeff(i))
    }

    /// Returns true if the constant term is nonzero.
    pub fn is_invertible(&self) -> bool {
        !self.coeff(0).is_zero()
    }

    /// Returns the polynomial formed by the first `n` coefficients.
    pub fn truncate(&self, n: usize) -> Polynomial<F> {
        Polynomial::from_coeffs(self.witness(), (0..n).map(|i| self.coeff(i)))
    }
}

/// Maps an index of a series shifted by `s` back to the source index.
fn shifted_index(n: usize, s: i64) -> Option<usize> {
    let n = i64::try_from(n).ok()?;
    usize::try_from(n - s).ok()
}

impl<F: SeriesCoeff + fmt::Display> fmt::Display for PowerSeries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = (0..DISPLAY_TERMS)
            .filter_map(|i| {
                let c = self.coeff(i);
                if c.is_zero() {
                    return None;
                }
                Some(match i {
                    0 => format!("{c}"),
                    1 => format!("{c}*x"),
                    _ => format!("{c}*x^{i}"),
                })
            })
            .collect();

        if terms.is_empty() {
            write!(f, "O(x^{DISPLAY_TERMS})")
        } else {
            write!(f, "{} + O(x^{DISPLAY_TERMS})", terms.join(" + "))
        }
    }
}

impl<F: SeriesCoeff> fmt::Debug for PowerSeries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs: Vec<F> = (0..DISPLAY_TERMS).map(|i| self.coeff(i)).collect();
        f.debug_struct("PowerSeries").field("leading", &coeffs).finish_non_exhaustive()
    }
}
