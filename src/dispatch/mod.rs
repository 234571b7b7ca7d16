//! Benchmarks comparing callback dispatch mechanisms.

pub mod callback_sum;
