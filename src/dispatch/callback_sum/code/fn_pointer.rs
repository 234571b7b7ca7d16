//! Callback passed as a plain `fn` pointer.
//!
//! The term function captures nothing; the slice travels as an argument.

use std::hint::black_box;

use super::element::Element;

/// Fixed signature of a per-index term function
pub type TermFn<E> = fn(&[E], usize) -> E;

/// Canonical per-index term over an explicitly passed slice
pub fn canonical_term<E: Element>(data: &[E], i: usize) -> E {
    E::term(i, data[i])
}

/// Sum `f(data, i)` over `[lo, hi)` calling through a function pointer.
#[inline(never)]
pub fn sum_fn_pointer<E: Element>(data: &[E], lo: usize, hi: usize, f: TermFn<E>) -> E {
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f(data, i));
    }
    x
}

pub fn run<E: Element>(data: &[E]) -> E {
    // Opaque pointer: LTO would otherwise propagate the constant and inline it
    let f = black_box(canonical_term::<E> as TermFn<E>);
    sum_fn_pointer(data, 0, data.len(), f)
}
