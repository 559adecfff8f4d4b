//! carray: typed growable arrays with exact, observable capacity management.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! carray sub-crates. For most users, adding `carray` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use carray::prelude::*;
//!
//! // Choose the element kind at run time from its selector code.
//! let mut a = Carray::with_typecode('i').unwrap();
//! for v in [3, 1, 2] {
//!     a.append(v).unwrap();
//! }
//! a.insert(-1, 9).unwrap();
//! assert_eq!(a.to_string(), "typed_array<integer>(3, 1, 9, 2)");
//!
//! // Integer arrays reject floats, even integral ones.
//! let err = a.append(2.0).unwrap_err();
//! assert_eq!(err.class(), ErrorClass::Range);
//!
//! // Capacity follows 2c + 1 growth and is visible through the footprint.
//! assert_eq!(a.capacity(), 7);
//! assert_eq!(a.storage_footprint(), 7 * 8);
//!
//! // Or fix the kind at compile time.
//! let b = TypedArray::<f64>::from_scalars([1, 2, 3]).unwrap();
//! assert!(b.reversed_copy().equals(&[3.0, 2.0, 1.0]));
//!
//! // Leftmost-match search over sorted data.
//! assert_eq!(binary_search(&[1, 2, 2, 5], &2), Some(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `carray-core` | Element kinds, scalars, errors, search |
//! | [`raw`] | `carray-raw` | Exact-capacity buffers and the capacity policy |
//! | [`array`] | `carray-array` | `TypedArray`, `Carray`, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds, scalar values, errors and search (`carray-core`).
///
/// Contains the [`types::Element`] strategy trait, the
/// [`types::ScalarSequence`] trait used for equality, and
/// [`types::binary_search_by`] for fallible comparators.
pub use carray_core as types;

/// Exact-capacity storage (`carray-raw`).
///
/// [`raw::CapacityPolicy`] holds the growth and shrink formulas.
pub use carray_raw as raw;

/// The array engine (`carray-array`).
///
/// [`array::TypedArray`] for a compile-time element type,
/// [`array::Carray`] for a kind chosen at run time.
pub use carray_array as array;

/// Common imports for typical carray usage.
///
/// ```rust
/// use carray::prelude::*;
/// ```
pub mod prelude {
    // Arrays
    pub use carray_array::{Carray, TypedArray};

    // Core types and traits
    pub use carray_core::{Element, ElementKind, Scalar, ScalarSequence};

    // Errors
    pub use carray_core::{ArrayError, ErrorClass};

    // Search
    pub use carray_core::binary_search;
}
