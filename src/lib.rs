//! # Dispatch-Cost-Bench
//!
//! Measures what it costs to invoke a per-element callback inside a summation
//! loop: inline code, function pointers, generic closures, boxed `dyn Fn`,
//! trait objects and a template-method trait, plus C counterparts.

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod utils;

pub use error::{BenchError, Result};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::callback_sum::{self, CallbackSumRunner, Element};
    pub use crate::error::{BenchError, Result};
    pub use crate::registry::{build_registry, default_algorithm, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        println!("Verifying {} algorithms...", algorithms.len());

        for algo in algorithms {
            println!("Verifying algorithm: {}", algo.name());
            match algo.verify() {
                Ok(_) => println!("  ✅ Algorithm '{}' passed verification", algo.name()),
                Err(e) => panic!(
                    "  ❌ Algorithm '{}' failed verification: {}",
                    algo.name(),
                    e
                ),
            }
        }
    }
}
