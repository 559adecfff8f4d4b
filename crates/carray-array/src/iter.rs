//! Borrowing iterators over array elements.

use std::iter::FusedIterator;
use std::slice;

use carray_core::{Element, Scalar};

/// Iterator over the elements of a [`TypedArray`](crate::TypedArray).
///
/// Holds a shared borrow, so the array cannot change while it is alive.
#[derive(Clone, Debug)]
pub struct Iter<'a, E: Element> {
    inner: slice::Iter<'a, E>,
}

impl<'a, E: Element> Iter<'a, E> {
    pub(crate) fn new(elements: &'a [E]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<E: Element> Iterator for Iter<'_, E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Element> DoubleEndedIterator for Iter<'_, E> {
    #[inline]
    fn next_back(&mut self) -> Option<E> {
        self.inner.next_back().copied()
    }
}

impl<E: Element> ExactSizeIterator for Iter<'_, E> {}

impl<E: Element> FusedIterator for Iter<'_, E> {}

/// Iterator over a [`Carray`](crate::Carray), yielding host values.
#[derive(Clone, Debug)]
pub enum ScalarIter<'a> {
    /// Over an integer array.
    Integer(Iter<'a, i64>),
    /// Over a float array.
    Float(Iter<'a, f64>),
}

impl Iterator for ScalarIter<'_> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        match self {
            Self::Integer(it) => it.next().map(Element::to_scalar),
            Self::Float(it) => it.next().map(Element::to_scalar),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Integer(it) => it.size_hint(),
            Self::Float(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for ScalarIter<'_> {}

impl FusedIterator for ScalarIter<'_> {}
