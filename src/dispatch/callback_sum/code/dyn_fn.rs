//! Type-erased callbacks behind `Box<dyn Fn>`.
//!
//! The box is built on every run. Without captured state it holds a
//! zero-sized closure; with a captured slice it allocates. The box passes
//! through `black_box` so the vtable call is never devirtualized.

use std::hint::black_box;

use super::element::Element;

/// Boxed term function taking the slice explicitly
pub type ErasedTerm<'a, E> = Box<dyn Fn(&[E], usize) -> E + 'a>;

/// Boxed term function closing over its slice
pub type ErasedCapture<'a, E> = Box<dyn Fn(usize) -> E + 'a>;

#[inline(never)]
pub fn sum_dyn_fn<E: Element>(data: &[E], lo: usize, hi: usize, f: ErasedTerm<'_, E>) -> E {
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f(data, i));
    }
    x
}

#[inline(never)]
pub fn sum_dyn_fn_capture<E: Element>(lo: usize, hi: usize, f: ErasedCapture<'_, E>) -> E {
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f(i));
    }
    x
}

pub fn run<E: Element>(data: &[E]) -> E {
    let f: ErasedTerm<'_, E> = Box::new(|d: &[E], i: usize| E::term(i, d[i]));
    let f = black_box(f);
    sum_dyn_fn(data, 0, data.len(), f)
}

pub fn run_capture<E: Element>(data: &[E]) -> E {
    let f: ErasedCapture<'_, E> = Box::new(move |i: usize| E::term(i, data[i]));
    let f = black_box(f);
    sum_dyn_fn_capture(0, data.len(), f)
}
