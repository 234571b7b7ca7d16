//! Utility modules for timing, sampling and reporting.

pub mod bench;
pub mod cpu_affinity;
pub mod logging;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{current_time_millis, time_seed, Measurement};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{sample_variants, PinStrategy, SampleConfig, TimedVariant, VariantStats};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about a benchmark variant.
/// Generic over F which is the function signature.
#[derive(Clone, Copy)]
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "inline", "dyn-fn")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
