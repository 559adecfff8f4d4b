//! Reusable array fixtures.
//!
//! - [`int_array`] / [`float_array`]: arrays built from literal values,
//!   with capacity equal to length.
//! - [`scenario_array`]: the `[3, 1, 2]` integer array used by the
//!   walkthrough scenario tests.
//! - [`grown_array`]: an array filled by appends, so its capacity follows
//!   the growth sequence rather than matching its length.

use carray_array::{Carray, TypedArray};
use carray_core::ElementKind;

/// An integer array holding exactly `values`.
pub fn int_array(values: &[i64]) -> TypedArray<i64> {
    TypedArray::from_slice(values)
}

/// A float array holding exactly `values`.
pub fn float_array(values: &[f64]) -> TypedArray<f64> {
    TypedArray::from_slice(values)
}

/// The integer array `[3, 1, 2]` behind the kind-erased API.
pub fn scenario_array() -> Carray {
    Carray::Integer(int_array(&[3, 1, 2]))
}

/// An array of `kind` filled with `0..count` by repeated appends.
pub fn grown_array(kind: ElementKind, count: i64) -> Carray {
    let mut array = Carray::new(kind);
    for v in 0..count {
        array.append(v).expect("every i64 fits both kinds");
    }
    array
}
