//! # Callback Summation
//!
//! Sums `f(i)` over a fixed array, reaching `f` through a different
//! mechanism per variant:
//!
//! `sum = Σ f(i), i in [0, 10000)` with `f(i) = i * a[i]` (`i64`) or
//! `f(i) = sqrt(i * a[i])` (`f32`), on the canonical input `a[i] = i`.
//!
//! Every variant must produce the same sum; only the timings differ.

pub mod bench;
pub mod code;
pub mod test;

pub use code::{canonical_input, CSum, Element};

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::TimedVariant;

/// Length of the input array
pub const SRC_SIZE: usize = 10_000;

/// Runner for the callback summation over element type `E`
pub struct CallbackSumRunner<E> {
    _element: PhantomData<fn() -> E>,
}

impl<E> CallbackSumRunner<E> {
    pub const fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<E> Default for CallbackSumRunner<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CSum> AlgorithmRunner for CallbackSumRunner<E> {
    fn name(&self) -> &'static str {
        E::ALGORITHM
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn description(&self) -> &'static str {
        "Cost of invoking a per-element callback inside a summation loop"
    }

    fn default_repetitions(&self) -> usize {
        E::REPETITIONS
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants::<E>().iter().map(|v| v.name).collect()
    }

    fn run_sequence(&self, repetitions: usize, out: &mut dyn std::io::Write) -> Result<()> {
        let data = canonical_input::<E>(SRC_SIZE);
        bench::run_sequence(&data, repetitions, out)?;
        Ok(())
    }

    fn timed_variants<'a>(&'a self, repetitions: usize) -> Vec<TimedVariant<'a>> {
        let data: Arc<Vec<E>> = Arc::new(canonical_input(SRC_SIZE));

        code::available_variants::<E>()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let func = v.function;

                TimedVariant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, checksum) = crate::measure!({
                            let mut checksum = E::ZERO;
                            for _ in 0..repetitions {
                                checksum = checksum.accumulate(func(std::hint::black_box(data.as_slice())));
                            }
                            checksum
                        });
                        (elapsed, checksum.to_f64())
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all::<E>()
    }
}
