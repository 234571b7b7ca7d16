//! Sampling harness behind `--report`.
//!
//! Every variant is warmed up, then sampled repeatedly in a shuffled order
//! while the thread is pinned to one core. Raw samples are reduced to
//! summary statistics per variant.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::bench::{time_seed, to_units, Measurement};
use super::cpu_affinity::CpuPinGuard;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once around the whole schedule
    #[default]
    Global,
    /// Pin/unpin around every sample
    PerSample,
}

/// Configuration for the sampling harness
#[derive(Clone, Debug)]
pub struct SampleConfig {
    /// Number of samples to collect per variant (default: 30)
    pub samples_per_variant: usize,
    /// Unmeasured runs per variant before sampling starts (default: 3)
    pub warmup_runs: usize,
    /// CPU pinning strategy (default: Global)
    pub pin_strategy: PinStrategy,
    /// Seed for the sample schedule; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            samples_per_variant: 30,
            warmup_runs: 3,
            pin_strategy: PinStrategy::default(),
            seed: None,
        }
    }
}

/// A variant ready to be sampled
pub struct TimedVariant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one sample and returns its measurement and checksum.
    /// Timing happens inside the closure so the boxed call stays outside the timed region.
    pub run: Box<dyn FnMut() -> (Measurement, f64) + 'a>,
}

/// Summary statistics for one variant, in measurement units
#[derive(Clone, Debug, PartialEq)]
pub struct VariantStats {
    pub name: String,
    pub description: String,
    pub avg: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    pub std_dev: f64,
    pub samples: usize,
    /// Checksum produced by the last sample
    pub checksum: Option<f64>,
}

impl VariantStats {
    /// Coefficient of variation (std_dev / avg)
    pub fn cv(&self) -> f64 {
        if self.avg > 0.0 {
            self.std_dev / self.avg
        } else {
            0.0
        }
    }
}

/// Sample every variant and reduce the samples to statistics.
///
/// Results come back in the order the variants were given, whatever order
/// they were sampled in.
pub fn sample_variants(mut variants: Vec<TimedVariant>, config: &SampleConfig) -> Vec<VariantStats> {
    if variants.is_empty() {
        return Vec::new();
    }

    for variant in &mut variants {
        for _ in 0..config.warmup_runs {
            black_box((variant.run)());
        }
    }

    let seed = config.seed.unwrap_or_else(time_seed);
    let mut schedule: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(config.samples_per_variant))
        .collect();
    schedule.shuffle(&mut StdRng::seed_from_u64(seed));
    tracing::debug!(seed, tasks = schedule.len(), "sample schedule shuffled");

    let mut samples: Vec<Vec<u64>> = (0..variants.len())
        .map(|_| Vec::with_capacity(config.samples_per_variant))
        .collect();
    let mut checksums: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for idx in schedule {
        let _sample_pin = (config.pin_strategy == PinStrategy::PerSample).then(CpuPinGuard::new);
        let (measurement, checksum) = (variants[idx].run)();
        samples[idx].push(to_units(measurement));
        checksums[idx] = Some(checksum);
    }

    variants
        .iter()
        .zip(samples)
        .zip(checksums)
        .map(|((variant, units), checksum)| summarize(variant.name, variant.description, units, checksum))
        .collect()
}

fn summarize(
    name: &'static str,
    description: &'static str,
    mut units: Vec<u64>,
    checksum: Option<f64>,
) -> VariantStats {
    let samples = units.len();
    if units.is_empty() {
        return VariantStats {
            name: name.to_string(),
            description: description.to_string(),
            avg: 0.0,
            median: 0,
            min: 0,
            max: 0,
            std_dev: 0.0,
            samples,
            checksum,
        };
    }

    units.sort_unstable();
    let avg = units.iter().map(|&u| u as f64).sum::<f64>() / samples as f64;
    let variance = units
        .iter()
        .map(|&u| {
            let diff = u as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / (samples - 1).max(1) as f64;

    VariantStats {
        name: name.to_string(),
        description: description.to_string(),
        avg,
        median: units[samples / 2],
        min: units[0],
        max: units[samples - 1],
        std_dev: variance.sqrt(),
        samples,
        checksum,
    }
}
