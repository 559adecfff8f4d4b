//! Exact-capacity raw storage for carray.
//!
//! Array capacity is part of the observable contract (it is reported
//! through the storage footprint), so storage cannot be delegated to
//! `Vec`, whose growth and shrink amounts are unspecified. This crate
//! owns the one place where element memory is allocated, resized and
//! freed, and the one place the growth and shrink formulas are written.
//! All allocation in the workspace happens here; callers only see the
//! `unsafe` prefix views, whose contract is a plain length bound.
//!
//! # Architecture
//!
//! ```text
//! RawBuffer<T>     (NonNull<MaybeUninit<T>> + capacity, exact realloc)
//! CapacityPolicy   (grow: 2c + 1, shrink: len <= c / 2 -> len)
//! ```
//!
//! Allocation failure is fatal: it is reported through
//! [`std::alloc::handle_alloc_error`], never as an error value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod policy;
pub mod raw;

pub use policy::CapacityPolicy;
pub use raw::RawBuffer;
