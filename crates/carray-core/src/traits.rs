//! Core abstraction for sequence-like values an array can be compared with.

use crate::scalar::Scalar;

/// Read-only positional access to a foreign sequence.
///
/// Implemented by plain slices and vectors of numbers, by the arrays
/// themselves, and by host adapters wrapping the host's own sequences.
/// Equality against an array is decided purely through this trait.
pub trait ScalarSequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// The element at `index` as a numeric value.
    ///
    /// Returns `None` if `index >= len()` or if the element exists but is
    /// not numeric (a host string, say). Either way it compares unequal to
    /// every array element.
    fn scalar_at(&self, index: usize) -> Option<Scalar>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy + Into<Scalar>> ScalarSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        self.get(index).map(|&v| v.into())
    }
}

impl<T: Copy + Into<Scalar>, const N: usize> ScalarSequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        self.get(index).map(|&v| v.into())
    }
}

impl<T: Copy + Into<Scalar>> ScalarSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        self.as_slice().scalar_at(index)
    }
}
