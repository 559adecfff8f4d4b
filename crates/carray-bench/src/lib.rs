//! Benchmark profiles for carray.
//!
//! - [`APPEND_PROFILE_LEN`]: element count of the append-loop profile.
//! - [`filled`]: an array built by repeated appends, so its capacity
//!   follows the growth sequence.
//! - [`sorted_with_duplicates`]: sorted search input with runs of equal
//!   values.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use carray_array::Carray;
use carray_core::ElementKind;

/// Appends per iteration in the append-loop profile.
pub const APPEND_PROFILE_LEN: i64 = 10_000;

/// Build an array of `kind` by appending `0..len`.
pub fn filled(kind: ElementKind, len: i64) -> Carray {
    let mut array = Carray::new(kind);
    for v in 0..len {
        // Every i64 is accepted by both kinds; a failure here is a bug.
        if let Err(err) = array.append(v) {
            panic!("benchmark profile rejected {v}: {err}");
        }
    }
    array
}

/// `len` sorted values where each value repeats `run` times.
pub fn sorted_with_duplicates(len: usize, run: usize) -> Vec<i64> {
    let run = run.max(1);
    (0..len).map(|i| (i / run) as i64).collect()
}
