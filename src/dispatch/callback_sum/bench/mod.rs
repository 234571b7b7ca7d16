//! Measurement driver: repeats a variant, folds every run into a checksum
//! and reports elapsed wall-clock milliseconds.

use std::fmt;
use std::hint::black_box;
use std::io::Write;

use super::code::{available_variants, CSum, Element, SumFn, REFERENCE_VARIANT};
use crate::utils::bench::current_time_millis;
use crate::utils::VariantInfo;

/// Outcome of measuring one variant
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord<E> {
    pub name: &'static str,
    pub checksum: E,
    pub elapsed_ms: u64,
}

impl<E: Element> fmt::Display for RunRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.name, self.checksum, self.elapsed_ms)
    }
}

/// Run `variant` over `data` `repetitions` times and time the whole loop.
///
/// Each run's sum is folded into the checksum with the element's
/// accumulation rule, which keeps the work observable.
pub fn measure<E: Element>(variant: &VariantInfo<SumFn<E>>, data: &[E], repetitions: usize) -> RunRecord<E> {
    let func = black_box(variant.function);
    let t0 = current_time_millis();
    let mut checksum = E::ZERO;
    for _ in 0..repetitions {
        checksum = checksum.accumulate(func(black_box(data)));
    }
    let elapsed_ms = current_time_millis() - t0;

    tracing::debug!(variant = variant.name, repetitions, elapsed_ms, "measured variant");

    RunRecord {
        name: variant.name,
        checksum,
        elapsed_ms,
    }
}

/// Variants in measurement order: the reference twice (the first pass
/// absorbs warm-up effects), then every variant after it.
pub fn default_sequence<E: CSum>() -> Vec<VariantInfo<SumFn<E>>> {
    let variants = available_variants::<E>();
    let mut sequence = Vec::with_capacity(variants.len() + 1);
    if let Some(reference) = variants.iter().find(|v| v.name == REFERENCE_VARIANT) {
        sequence.push(*reference);
    }
    sequence.extend(variants);
    sequence
}

/// Measure the default sequence, writing one `<name>: <checksum>: <ms>`
/// line per measurement to `out` as soon as it is available.
pub fn run_sequence<E: CSum, W: Write + ?Sized>(
    data: &[E],
    repetitions: usize,
    out: &mut W,
) -> std::io::Result<Vec<RunRecord<E>>> {
    let sequence = default_sequence::<E>();
    let mut records = Vec::with_capacity(sequence.len());
    for variant in &sequence {
        let record = measure(variant, data, repetitions);
        writeln!(out, "{}", record)?;
        out.flush()?;
        records.push(record);
    }
    Ok(records)
}
