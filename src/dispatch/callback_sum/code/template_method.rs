//! Template method: the loop lives on the abstraction, implementors only
//! supply `f`.
//!
//! `sum` is an inherent method of `dyn Adder<E>` rather than a provided trait
//! method, so it is compiled once and reaches `f` through the vtable.

use std::hint::black_box;

use super::element::Element;

pub trait Adder<E> {
    fn f(&self, i: usize) -> E;
}

impl<E: Element> dyn Adder<E> + '_ {
    /// Sum `self.f(i)` over `[lo, hi)`
    #[inline(never)]
    pub fn sum(&self, lo: usize, hi: usize) -> E {
        let mut x = E::ZERO;
        for i in lo..hi {
            x = x.accumulate(self.f(i));
        }
        x
    }
}

pub struct SliceAdder<'a, E> {
    data: &'a [E],
}

impl<'a, E: Element> SliceAdder<'a, E> {
    pub fn new(data: &'a [E]) -> Self {
        Self { data }
    }

    pub fn test(&self) -> E {
        let adder: &dyn Adder<E> = self;
        let adder = black_box(adder);
        adder.sum(0, self.data.len())
    }
}

impl<E: Element> Adder<E> for SliceAdder<'_, E> {
    fn f(&self, i: usize) -> E {
        E::term(i, self.data[i])
    }
}

pub fn run<E: Element>(data: &[E]) -> E {
    SliceAdder::new(data).test()
}
