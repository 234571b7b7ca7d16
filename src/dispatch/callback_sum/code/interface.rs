//! Callback as a one-method trait object.

use std::hint::black_box;

use super::element::Element;

/// Capability to compute `f(i)`
pub trait Func<E> {
    fn f(&self, i: usize) -> E;
}

/// Sum `f.f(i)` over `[lo, hi)` through the vtable
#[inline(never)]
pub fn sum_interface<E: Element>(lo: usize, hi: usize, f: &dyn Func<E>) -> E {
    let mut x = E::ZERO;
    for i in lo..hi {
        x = x.accumulate(f.f(i));
    }
    x
}

/// `Func` over a borrowed input slice
pub struct SliceFunc<'a, E> {
    data: &'a [E],
}

impl<'a, E: Element> SliceFunc<'a, E> {
    pub fn new(data: &'a [E]) -> Self {
        Self { data }
    }

    pub fn test(&self) -> E {
        let f: &dyn Func<E> = self;
        let f = black_box(f);
        sum_interface(0, self.data.len(), f)
    }
}

impl<E: Element> Func<E> for SliceFunc<'_, E> {
    fn f(&self, i: usize) -> E {
        E::term(i, self.data[i])
    }
}

pub fn run<E: Element>(data: &[E]) -> E {
    SliceFunc::new(data).test()
}
