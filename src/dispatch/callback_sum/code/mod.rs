//! Implementation variants of the callback summation.
//!
//! Each variant computes `Σ f(i)` over the whole input with a different
//! mechanism for reaching `f`.

pub mod c_impl;
pub mod dyn_fn;
pub mod element;
pub mod fn_pointer;
pub mod generic;
pub mod inline;
pub mod interface;
pub mod template_method;

pub use c_impl::{CSum, C_IMPL_AVAILABLE};
pub use element::{canonical_input, Element};

use crate::utils::VariantInfo;

/// Name of the variant every other one is checked against
pub const REFERENCE_VARIANT: &str = "inline";

/// Signature of a full-input run: sums `f(i)` over `[0, data.len())`
pub type SumFn<E> = fn(&[E]) -> E;

/// Get all available variants, reference first
pub fn available_variants<E: CSum>() -> Vec<VariantInfo<SumFn<E>>> {
    let mut variants: Vec<VariantInfo<SumFn<E>>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Expression written directly in the loop body",
            function: inline::run::<E>,
        },
        VariantInfo {
            name: "fn-pointer",
            description: "Plain fn pointer taking the slice explicitly",
            function: fn_pointer::run::<E>,
        },
        VariantInfo {
            name: "generic",
            description: "Generic Fn parameter, monomorphised per call site",
            function: generic::run::<E>,
        },
        VariantInfo {
            name: "generic-capture",
            description: "Generic Fn parameter, closure captures the slice",
            function: generic::run_capture::<E>,
        },
        VariantInfo {
            name: "dyn-fn",
            description: "Box<dyn Fn> without captured state",
            function: dyn_fn::run::<E>,
        },
        VariantInfo {
            name: "dyn-fn-capture",
            description: "Box<dyn Fn> capturing the slice",
            function: dyn_fn::run_capture::<E>,
        },
        VariantInfo {
            name: "dyn-interface",
            description: "&dyn Func trait object holding the slice",
            function: interface::run::<E>,
        },
        VariantInfo {
            name: "template-method",
            description: "Loop on dyn Adder calling the virtual f",
            function: template_method::run::<E>,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-inline",
            description: "C loop with the expression inlined",
            function: c_impl::run_inline::<E>,
        });
        variants.push(VariantInfo {
            name: "c-fn-pointer",
            description: "C loop calling a Rust extern \"C\" callback",
            function: c_impl::run_fn_pointer::<E>,
        });
    }

    variants
}
