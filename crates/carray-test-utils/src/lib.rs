//! Test utilities and mock types for carray development.
//!
//! Provides a [`MockSequence`] standing in for a host-side sequence in
//! equality tests, fixture builders for common arrays, and
//! [`init_tracing`] for tests that want to see reallocation events.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use carray_core::{Scalar, ScalarSequence};

pub use fixtures::{float_array, grown_array, int_array, scenario_array};

/// Install a `tracing` subscriber for the current test binary.
///
/// Honors `RUST_LOG`, defaulting to `trace` so reallocation events are
/// visible. Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Mock implementation of [`ScalarSequence`] with non-numeric holes.
///
/// Each position holds either a number or `None`, which models a host
/// element that is not numeric (a string, say) and so never compares
/// equal to an array element.
#[derive(Clone, Debug, Default)]
pub struct MockSequence {
    items: Vec<Option<Scalar>>,
}

impl MockSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a numeric item.
    pub fn push(mut self, value: impl Into<Scalar>) -> Self {
        self.items.push(Some(value.into()));
        self
    }

    /// Append a non-numeric item.
    pub fn push_opaque(mut self) -> Self {
        self.items.push(None);
        self
    }
}

impl<T: Into<Scalar>> FromIterator<T> for MockSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|v| Some(v.into())).collect(),
        }
    }
}

impl ScalarSequence for MockSequence {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        self.items.get(index).copied().flatten()
    }
}
