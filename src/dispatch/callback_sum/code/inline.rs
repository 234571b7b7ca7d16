//! Baseline: the per-index expression written directly in the loop body.
//!
//! No call boundary exists, so the compiler sees the whole computation.

use super::element::Element;

/// Sum `f(i) = term(i, data[i])` over `[lo, hi)` with the expression inlined.
#[inline(never)]
pub fn sum_inline<E: Element>(data: &[E], lo: usize, hi: usize) -> E {
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(E::term(i, data[i]));
    }
    x
}

pub fn run<E: Element>(data: &[E]) -> E {
    sum_inline(data, 0, data.len())
}
