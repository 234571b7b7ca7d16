//! Algorithm registry for discovering and running benchmarks.
//!
//! Each numeric mode of the callback summation is registered as its own
//! algorithm; the binary picks one by name or falls back to the mode
//! compiled in with the `float` feature.

use std::io::Write;

use crate::dispatch::callback_sum::CallbackSumRunner;
use crate::error::Result;
use crate::utils::timer::TimedVariant;

/// Trait that all benchmark runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "callback_sum_i64")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "dispatch")
    fn category(&self) -> &'static str;

    /// Repetitions per measurement when none are requested
    fn default_repetitions(&self) -> usize;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Measure the default variant sequence, one result line per measurement
    fn run_sequence(&self, repetitions: usize, out: &mut dyn Write) -> Result<()>;

    /// Closures for the sampling harness; each call times `repetitions`
    /// runs of one variant and returns the checksum.
    fn timed_variants<'a>(&'a self, repetitions: usize) -> Vec<TimedVariant<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<()>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(CallbackSumRunner::<i64>::new());
    registry.register(CallbackSumRunner::<f32>::new());

    registry
}

/// Name of the algorithm selected at build time
#[cfg(not(feature = "float"))]
pub const fn default_algorithm() -> &'static str {
    "callback_sum_i64"
}

#[cfg(feature = "float")]
pub const fn default_algorithm() -> &'static str {
    "callback_sum_f32"
}
