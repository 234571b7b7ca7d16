//! Callbacks as generic parameters, resolved at compile time per call site.

use super::element::Element;

/// Sum `f(data, i)` over `[lo, hi)` for any callable without captured state
pub fn sum_generic<E, F>(data: &[E], lo: usize, hi: usize, f: F) -> E
where
    E: Element,
    F: Fn(&[E], usize) -> E,
{
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f(data, i));
    }
    x
}

/// Sum `f(i)` over `[lo, hi)` for a callable that carries its own state
pub fn sum_generic_capture<E, F>(lo: usize, hi: usize, f: F) -> E
where
    E: Element,
    F: Fn(usize) -> E,
{
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f(i));
    }
    x
}

pub fn run<E: Element>(data: &[E]) -> E {
    sum_generic(data, 0, data.len(), |d: &[E], i| E::term(i, d[i]))
}

pub fn run_capture<E: Element>(data: &[E]) -> E {
    sum_generic_capture(0, data.len(), |i| E::term(i, data[i]))
}
