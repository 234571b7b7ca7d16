//! FFI bindings for the C implementations.
//!
//! `c-inline` runs the whole loop in C. `c-fn-pointer` runs the loop in C
//! and calls back into a Rust `extern "C"` term function on every index.

use super::element::Element;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    pub type TermI64 = extern "C" fn(*const i64, size_t) -> i64;
    pub type TermF32 = extern "C" fn(*const f32, size_t) -> f32;

    extern "C" {
        pub fn callback_sum_c_inline_i64(src: *const i64, lo: size_t, hi: size_t) -> i64;
        pub fn callback_sum_c_fn_pointer_i64(src: *const i64, lo: size_t, hi: size_t, f: TermI64) -> i64;
        pub fn callback_sum_c_inline_f32(src: *const f32, lo: size_t, hi: size_t) -> f32;
        pub fn callback_sum_c_fn_pointer_f32(src: *const f32, lo: size_t, hi: size_t, f: TermF32) -> f32;
    }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// Element types with C summation kernels
pub trait CSum: Element {
    /// C loop with the expression inlined, over `[lo, hi)`
    fn c_sum_inline(data: &[Self], lo: usize, hi: usize) -> Self;

    /// C loop calling a Rust callback through a function pointer, over `[lo, hi)`
    fn c_sum_fn_pointer(data: &[Self], lo: usize, hi: usize) -> Self;
}

/// Clamp `[lo, hi)` to something the C loop can index safely
#[cfg_attr(not(c_implementation_active), allow(dead_code))]
fn checked_range(len: usize, lo: usize, hi: usize) -> (usize, usize) {
    if lo >= hi {
        return (lo, lo);
    }
    assert!(hi <= len, "range end {} out of bounds for length {}", hi, len);
    (lo, hi)
}

#[cfg(c_implementation_active)]
extern "C" fn term_i64(src: *const i64, i: usize) -> i64 {
    // SAFETY: the C loop only passes indices inside the range checked by the caller.
    let x = unsafe { *src.add(i) };
    i64::term(i, x)
}

#[cfg(c_implementation_active)]
extern "C" fn term_f32(src: *const f32, i: usize) -> f32 {
    // SAFETY: as for term_i64.
    let x = unsafe { *src.add(i) };
    f32::term(i, x)
}

#[cfg(c_implementation_active)]
impl CSum for i64 {
    fn c_sum_inline(data: &[Self], lo: usize, hi: usize) -> Self {
        let (lo, hi) = checked_range(data.len(), lo, hi);
        // SAFETY: `hi <= data.len()` and the C side reads only `[lo, hi)`.
        unsafe { ffi::callback_sum_c_inline_i64(data.as_ptr(), lo, hi) }
    }

    fn c_sum_fn_pointer(data: &[Self], lo: usize, hi: usize) -> Self {
        let (lo, hi) = checked_range(data.len(), lo, hi);
        // SAFETY: as above; the callback reads the same indices.
        unsafe { ffi::callback_sum_c_fn_pointer_i64(data.as_ptr(), lo, hi, term_i64) }
    }
}

#[cfg(c_implementation_active)]
impl CSum for f32 {
    fn c_sum_inline(data: &[Self], lo: usize, hi: usize) -> Self {
        let (lo, hi) = checked_range(data.len(), lo, hi);
        // SAFETY: `hi <= data.len()` and the C side reads only `[lo, hi)`.
        unsafe { ffi::callback_sum_c_inline_f32(data.as_ptr(), lo, hi) }
    }

    fn c_sum_fn_pointer(data: &[Self], lo: usize, hi: usize) -> Self {
        let (lo, hi) = checked_range(data.len(), lo, hi);
        // SAFETY: as above; the callback reads the same indices.
        unsafe { ffi::callback_sum_c_fn_pointer_f32(data.as_ptr(), lo, hi, term_f32) }
    }
}

// Stub implementations for missing C compiler; never registered as variants
#[cfg(not(c_implementation_active))]
impl CSum for i64 {
    fn c_sum_inline(_data: &[Self], _lo: usize, _hi: usize) -> Self {
        panic!("C implementation not compiled (requires a C compiler)")
    }

    fn c_sum_fn_pointer(_data: &[Self], _lo: usize, _hi: usize) -> Self {
        panic!("C implementation not compiled (requires a C compiler)")
    }
}

#[cfg(not(c_implementation_active))]
impl CSum for f32 {
    fn c_sum_inline(_data: &[Self], _lo: usize, _hi: usize) -> Self {
        panic!("C implementation not compiled (requires a C compiler)")
    }

    fn c_sum_fn_pointer(_data: &[Self], _lo: usize, _hi: usize) -> Self {
        panic!("C implementation not compiled (requires a C compiler)")
    }
}

pub fn run_inline<E: CSum>(data: &[E]) -> E {
    E::c_sum_inline(data, 0, data.len())
}

pub fn run_fn_pointer<E: CSum>(data: &[E]) -> E {
    E::c_sum_fn_pointer(data, 0, data.len())
}
