//! Timing primitives shared by the driver and the sampling harness.
//!
//! The driver always reports wall-clock milliseconds. The `--report`
//! sampling mode uses CPU cycle counters by default (`cpu_cycles` feature);
//! build with `--features use_time` or `--no-default-features` to sample
//! wall-clock nanoseconds instead.

use std::sync::OnceLock;
use std::time::Instant;

// ============================================================================
// Millisecond timer used by the measurement driver
// ============================================================================

static PROCESS_EPOCH: OnceLock<Instant> = OnceLock::new();

/// Milliseconds elapsed since the first call in this process.
///
/// Backed by a monotonic clock, so successive readings never decrease.
pub fn current_time_millis() -> u64 {
    PROCESS_EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================
//
// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Read current measurement (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Raw measurement units: cycles/ticks, or nanoseconds
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_units(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_units(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        "cycles"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Render a value expressed in measurement units for the report table
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(units: f64) -> String {
    format!("{:.0} {}", units, unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(units: f64) -> String {
    format!("{:.2?}", std::time::Duration::from_nanos(units as u64))
}

/// Time one expression, returning `(Measurement, value)`.
///
/// The value goes through `black_box` before the clock is read again.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($body);
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, value)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
