//! Core types and traits for carray.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: element kinds,
//! the host-facing [`Scalar`] value, the per-kind [`Element`] strategy,
//! error types, the [`ScalarSequence`] trait, and the boundary-search
//! helper.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod kind;
pub mod scalar;
pub mod search;
pub mod traits;

pub use element::Element;
pub use error::{ArrayError, ErrorClass};
pub use kind::ElementKind;
pub use scalar::Scalar;
pub use search::{binary_search, binary_search_by};
pub use traits::ScalarSequence;
