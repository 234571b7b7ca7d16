//! Thread pinning for the sampling harness.
//!
//! Linux pins through `sched_setaffinity` and restores the saved mask on
//! drop. Other platforms get a guard that never pins.

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reads thread state.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<SavedMask> {
        // SAFETY: cpu_set_t is plain data; the kernel fills at most size_of bytes.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(SavedMask(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: the set is initialised with CPU_ZERO before use.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) -> bool {
        // SAFETY: the mask came from sched_getaffinity on this thread.
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save() -> Option<SavedMask> {
        None
    }
    pub fn pin(_core: usize) -> bool {
        false
    }
    pub fn restore(_saved: &SavedMask) -> bool {
        true
    }
}

/// RAII guard: pins the thread to the core it is running on, restores the
/// previous affinity on drop.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new();
///     // ... timed section ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedMask>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let saved = platform::save();
        let pinned_core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => None,
        };
        match pinned_core {
            Some(core) => tracing::trace!(core, "pinned sampling thread"),
            None => tracing::trace!("cpu pinning unavailable"),
        }
        Self { pinned_core, saved }
    }

    /// Core this thread is pinned to, if pinning succeeded
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(saved) = &self.saved {
            if !platform::restore(saved) {
                tracing::warn!("failed to restore cpu affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
    }

    #[test]
    fn test_nested_guards_unwind() {
        let outer = CpuPinGuard::new();
        {
            let inner = CpuPinGuard::new();
            assert_eq!(inner.is_pinned(), inner.core_id().is_some());
        }
        assert_eq!(outer.is_pinned(), outer.core_id().is_some());
    }
}
