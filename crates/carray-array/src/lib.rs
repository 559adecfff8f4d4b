//! Typed growable arrays for carray.
//!
//! [`TypedArray<E>`] is the array engine, written once and monomorphized
//! per [`Element`](carray_core::Element) type. [`Carray`] wraps the two
//! instantiations in a closed enum so that callers choosing the element
//! kind at run time get one uniform API over [`Scalar`](carray_core::Scalar)
//! values.
//!
//! # Architecture
//!
//! ```text
//! Carray ──match──► TypedArray<i64> ─┐
//!        └────────► TypedArray<f64> ─┴─► RawBuffer<E> + CapacityPolicy
//! ```
//!
//! All storage management is delegated to `carray-raw`; all per-kind
//! behavior to the `Element` strategy in `carray-core`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod carray;
pub mod iter;
pub mod typed;

pub use carray::Carray;
pub use iter::{Iter, ScalarIter};
pub use typed::TypedArray;
