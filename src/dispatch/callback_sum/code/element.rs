//! Numeric element types the benchmark runs over.
//!
//! Integer mode uses `i64` with wrapping arithmetic for the elements, the
//! per-run sum and the repeated-run checksum alike. Floating-point mode uses
//! `f32` throughout with no widening.

use std::fmt::{Debug, Display};

pub trait Element: Copy + PartialEq + Debug + Display + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Registry name of the benchmark over this element type
    const ALGORITHM: &'static str;
    /// Default number of repetitions per measurement
    const REPETITIONS: usize;

    /// Canonical input value at index `i`
    fn from_index(i: usize) -> Self;

    /// Per-index term `f(i)` for the element `x = data[i]`
    fn term(i: usize, x: Self) -> Self;

    /// Accumulation step used by every summation loop and by the checksum
    fn accumulate(self, rhs: Self) -> Self;

    /// Exact (or closest representable) value of `Σ f(i)` over `[0, n)` on canonical input
    fn closed_form(n: usize) -> Self;

    /// Whether two sums of the same variant family agree
    fn agrees_with(self, reference: Self) -> bool;

    /// Whether a canonical-input sum is acceptably close to the closed form
    fn near_closed_form(self, n: usize) -> bool;

    fn to_f64(self) -> f64;
}

impl Element for i64 {
    const ZERO: Self = 0;
    const ALGORITHM: &'static str = "callback_sum_i64";
    const REPETITIONS: usize = 1_000_000;

    #[inline(always)]
    fn from_index(i: usize) -> Self {
        i as i64
    }

    #[inline(always)]
    fn term(i: usize, x: Self) -> Self {
        (i as i64).wrapping_mul(x)
    }

    #[inline(always)]
    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    /// n(n-1)(2n-1)/6, the sum of squares below n
    fn closed_form(n: usize) -> Self {
        let n = n as i128;
        (n * (n - 1) * (2 * n - 1) / 6) as i64
    }

    fn agrees_with(self, reference: Self) -> bool {
        self == reference
    }

    fn near_closed_form(self, n: usize) -> bool {
        self == Self::closed_form(n)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const ALGORITHM: &'static str = "callback_sum_f32";
    const REPETITIONS: usize = 100_000;

    #[inline(always)]
    fn from_index(i: usize) -> Self {
        i as f32
    }

    #[inline(always)]
    fn term(i: usize, x: Self) -> Self {
        (i as f32 * x).sqrt()
    }

    #[inline(always)]
    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }

    /// n(n-1)/2: sqrt(i * i) = i on canonical input
    fn closed_form(n: usize) -> Self {
        let n = n as f64;
        (n * (n - 1.0) / 2.0) as f32
    }

    fn agrees_with(self, reference: Self) -> bool {
        relative_error(self as f64, reference as f64) <= 1e-6
    }

    /// Sequential single-precision accumulation drifts; allow 1e-3 relative error
    fn near_closed_form(self, n: usize) -> bool {
        relative_error(self as f64, Self::closed_form(n) as f64) < 1e-3
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if expected.abs() > f64::EPSILON {
        diff / expected.abs()
    } else {
        diff
    }
}

/// Canonical input `data[i] = i` of length `len`
pub fn canonical_input<E: Element>(len: usize) -> Vec<E> {
    (0..len).map(E::from_index).collect()
}
