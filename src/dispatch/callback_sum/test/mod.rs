//! Cross-variant verification for the callback summation.

use super::code::{available_variants, canonical_input, CSum, REFERENCE_VARIANT};
use super::SRC_SIZE;
use crate::error::{BenchError, Result};

/// Verify every variant against the reference and the closed form
/// on the canonical input.
pub fn verify_all<E: CSum>() -> Result<()> {
    let data = canonical_input::<E>(SRC_SIZE);
    let variants = available_variants::<E>();

    let reference = variants
        .iter()
        .find(|v| v.name == REFERENCE_VARIANT)
        .ok_or(BenchError::MissingReference(REFERENCE_VARIANT))?;
    let expected = (reference.function)(&data);

    for variant in &variants {
        let actual = (variant.function)(&data);

        if !actual.agrees_with(expected) {
            return Err(BenchError::Mismatch {
                variant: variant.name,
                reference: REFERENCE_VARIANT,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }

        if !actual.near_closed_form(SRC_SIZE) {
            return Err(BenchError::ClosedForm {
                variant: variant.name,
                expected: E::closed_form(SRC_SIZE).to_string(),
                actual: actual.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::callback_sum::code::{
        c_impl, dyn_fn, fn_pointer, generic, inline, interface, template_method, Element, C_IMPL_AVAILABLE,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;
    use std::hint::black_box;

    thread_local! {
        static FN_POINTER_CALLS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
    }

    fn recording_term(data: &[i64], i: usize) -> i64 {
        FN_POINTER_CALLS.with(|calls| calls.borrow_mut().push(i));
        i64::term(i, data[i])
    }

    /// `Func` and `Adder` implementor that logs every index it is asked for
    struct Recorder<'a> {
        data: &'a [i64],
        calls: RefCell<Vec<usize>>,
    }

    impl<'a> Recorder<'a> {
        fn new(data: &'a [i64]) -> Self {
            Self {
                data,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn record(&self, i: usize) -> i64 {
            self.calls.borrow_mut().push(i);
            i64::term(i, self.data[i])
        }

        fn take(&self) -> Vec<usize> {
            self.calls.take()
        }
    }

    impl interface::Func<i64> for Recorder<'_> {
        fn f(&self, i: usize) -> i64 {
            self.record(i)
        }
    }

    impl template_method::Adder<i64> for Recorder<'_> {
        fn f(&self, i: usize) -> i64 {
            self.record(i)
        }
    }

    /// Every range-taking summation routine, applied to `[lo, hi)`
    fn range_sums<E: CSum>(data: &[E], lo: usize, hi: usize) -> Vec<(&'static str, E)> {
        let mut sums = vec![
            ("inline", inline::sum_inline(data, lo, hi)),
            (
                "fn-pointer",
                fn_pointer::sum_fn_pointer(data, lo, hi, fn_pointer::canonical_term::<E>),
            ),
            (
                "generic",
                generic::sum_generic(data, lo, hi, |d: &[E], i| E::term(i, d[i])),
            ),
            (
                "generic-capture",
                generic::sum_generic_capture(lo, hi, |i| E::term(i, data[i])),
            ),
            (
                "dyn-fn",
                dyn_fn::sum_dyn_fn(data, lo, hi, Box::new(|d: &[E], i: usize| E::term(i, d[i]))),
            ),
            (
                "dyn-fn-capture",
                dyn_fn::sum_dyn_fn_capture(lo, hi, Box::new(|i: usize| E::term(i, data[i]))),
            ),
            (
                "dyn-interface",
                interface::sum_interface(lo, hi, &interface::SliceFunc::new(data)),
            ),
            ("template-method", {
                let adder = template_method::SliceAdder::new(data);
                let adder: &dyn template_method::Adder<E> = &adder;
                adder.sum(lo, hi)
            }),
        ];
        if C_IMPL_AVAILABLE {
            sums.push(("c-inline", E::c_sum_inline(data, lo, hi)));
            sums.push(("c-fn-pointer", E::c_sum_fn_pointer(data, lo, hi)));
        }
        sums
    }

    #[test]
    fn test_verify_integer() {
        verify_all::<i64>().expect("All i64 variants should agree");
    }

    #[test]
    fn test_verify_float() {
        verify_all::<f32>().expect("All f32 variants should agree");
    }

    #[test]
    fn test_integer_canonical_sum() {
        let data = canonical_input::<i64>(SRC_SIZE);
        for variant in available_variants::<i64>() {
            assert_eq!((variant.function)(&data), 333_283_335_000, "{}", variant.name);
        }
    }

    #[test]
    fn test_float_canonical_sum() {
        let data = canonical_input::<f32>(SRC_SIZE);
        for variant in available_variants::<f32>() {
            let sum = (variant.function)(&data);
            // Exact result of ascending single-precision accumulation
            assert_eq!(sum, 49_992_896.0, "{}", variant.name);
            let rel = ((sum as f64) - 49_995_000.0).abs() / 49_995_000.0;
            assert!(rel < 1e-3, "{}: relative error {}", variant.name, rel);
        }
    }

    #[test]
    fn test_float_sum_depends_on_order() {
        let data = canonical_input::<f32>(SRC_SIZE);
        let ascending = inline::sum_inline(&data, 0, SRC_SIZE);
        let descending = (0..SRC_SIZE)
            .rev()
            .fold(0.0f32, |x, i| x.accumulate(f32::term(i, data[i])));

        assert_eq!(descending, 49_999_072.0);
        assert_ne!(ascending, descending);
    }

    #[test]
    fn test_idempotent() {
        let ints = canonical_input::<i64>(SRC_SIZE);
        let floats = canonical_input::<f32>(SRC_SIZE);
        for variant in available_variants::<i64>() {
            assert_eq!((variant.function)(&ints), (variant.function)(&ints), "{}", variant.name);
        }
        for variant in available_variants::<f32>() {
            let first = (variant.function)(&floats);
            let second = (variant.function)(&floats);
            assert_eq!(first.to_bits(), second.to_bits(), "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_range_is_zero() {
        let ints = canonical_input::<i64>(64);
        let floats = canonical_input::<f32>(64);
        for lo in [0, 17, 64] {
            for (name, sum) in range_sums(&ints, lo, lo) {
                assert_eq!(sum, 0, "{} over [{}, {})", name, lo, lo);
            }
            for (name, sum) in range_sums(&floats, lo, lo) {
                assert_eq!(sum, 0.0, "{} over [{}, {})", name, lo, lo);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for variant in available_variants::<i64>() {
            assert_eq!((variant.function)(&[]), 0, "{}", variant.name);
        }
    }

    #[test]
    fn test_random_subranges_match_closed_form() {
        let data = canonical_input::<i64>(SRC_SIZE);
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _ in 0..50 {
            let a = rng.random_range(0..=SRC_SIZE);
            let b = rng.random_range(0..=SRC_SIZE);
            let (lo, hi) = (a.min(b), a.max(b));
            let expected = i64::closed_form(hi) - i64::closed_form(lo);

            for (name, sum) in range_sums(&data, lo, hi) {
                assert_eq!(sum, expected, "{} over [{}, {})", name, lo, hi);
            }
        }
    }

    #[test]
    fn test_random_subranges_agree_float() {
        let data = canonical_input::<f32>(SRC_SIZE);
        let mut rng = StdRng::seed_from_u64(0xF10A7);

        for _ in 0..50 {
            let a = rng.random_range(0..=SRC_SIZE);
            let b = rng.random_range(0..=SRC_SIZE);
            let (lo, hi) = (a.min(b), a.max(b));

            let sums = range_sums(&data, lo, hi);
            let reference = sums[0].1;
            for (name, sum) in sums {
                assert_eq!(sum.to_bits(), reference.to_bits(), "{} over [{}, {})", name, lo, hi);
            }
        }
    }

    #[test]
    fn test_integer_wraps_on_overflow() {
        let data = vec![i64::MAX; 4];
        // Σ i * MAX for i in 0..4 = 6 * MAX, wrapped
        let expected = i64::MAX.wrapping_mul(6);
        for (name, sum) in range_sums(&data, 0, 4) {
            assert_eq!(sum, expected, "{}", name);
        }
    }

    #[test]
    fn test_c_variants_registered_when_compiled() {
        let names: Vec<_> = available_variants::<i64>().iter().map(|v| v.name).collect();
        assert_eq!(names.contains(&"c-inline"), c_impl::C_IMPL_AVAILABLE);
        assert_eq!(names.contains(&"c-fn-pointer"), c_impl::C_IMPL_AVAILABLE);
        assert_eq!(names[0], REFERENCE_VARIANT);
    }

    #[test]
    fn test_callbacks_invoked_once_per_index_in_order() {
        let data = canonical_input::<i64>(256);
        let ranges = [(0, 256), (13, 200), (40, 40), (255, 256)];

        for (lo, hi) in ranges {
            let expected_calls: Vec<usize> = (lo..hi).collect();
            let expected_sum = i64::closed_form(hi) - i64::closed_form(lo);
            let recorder = Recorder::new(&data);

            FN_POINTER_CALLS.with(|calls| calls.borrow_mut().clear());
            let f = black_box(recording_term as fn_pointer::TermFn<i64>);
            assert_eq!(fn_pointer::sum_fn_pointer(&data, lo, hi, f), expected_sum);
            let calls = FN_POINTER_CALLS.with(|calls| calls.take());
            assert_eq!(calls, expected_calls, "fn-pointer over [{}, {})", lo, hi);

            let f = |_: &[i64], i: usize| recorder.record(i);
            assert_eq!(generic::sum_generic(&data, lo, hi, f), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "generic over [{}, {})", lo, hi);

            assert_eq!(generic::sum_generic_capture(lo, hi, |i| recorder.record(i)), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "generic-capture over [{}, {})", lo, hi);

            let f: dyn_fn::ErasedTerm<'_, i64> = Box::new(|_: &[i64], i: usize| recorder.record(i));
            assert_eq!(dyn_fn::sum_dyn_fn(&data, lo, hi, black_box(f)), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "dyn-fn over [{}, {})", lo, hi);

            let f: dyn_fn::ErasedCapture<'_, i64> = Box::new(|i: usize| recorder.record(i));
            assert_eq!(dyn_fn::sum_dyn_fn_capture(lo, hi, black_box(f)), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "dyn-fn-capture over [{}, {})", lo, hi);

            let func: &dyn interface::Func<i64> = &recorder;
            assert_eq!(interface::sum_interface(lo, hi, black_box(func)), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "dyn-interface over [{}, {})", lo, hi);

            let adder: &dyn template_method::Adder<i64> = &recorder;
            assert_eq!(black_box(adder).sum(lo, hi), expected_sum);
            assert_eq!(recorder.take(), expected_calls, "template-method over [{}, {})", lo, hi);
        }
    }

    #[test]
    #[should_panic]
    fn test_range_past_input_panics() {
        let data = canonical_input::<i64>(8);
        inline::sum_inline(&data, 0, 9);
    }
}
