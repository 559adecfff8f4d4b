//! Kind-erased array with one uniform, [`Scalar`]-based API.

use std::fmt;

use carray_core::{ArrayError, Element, ElementKind, Scalar, ScalarSequence};

use crate::iter::ScalarIter;
use crate::typed::TypedArray;

/// A typed array whose element kind is chosen at run time.
///
/// The kind is resolved once, at construction, into one of the two
/// monomorphized arrays; every operation after that is a single `match`.
/// Host adapters hold this type.
///
/// # Examples
///
/// ```
/// use carray_array::Carray;
/// use carray_core::Scalar;
///
/// let mut a = Carray::with_typecode('d').unwrap();
/// a.append(1).unwrap();
/// a.append(2.5).unwrap();
/// assert_eq!(a.get(0).unwrap(), Scalar::Float(1.0));
/// assert_eq!(a.to_string(), "typed_array<float>(1.0, 2.5)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Carray {
    /// Holds 64-bit signed integers.
    Integer(TypedArray<i64>),
    /// Holds 64-bit floats.
    Float(TypedArray<f64>),
}

macro_rules! dispatch {
    ($self:expr, $array:ident => $body:expr) => {
        match $self {
            Carray::Integer($array) => $body,
            Carray::Float($array) => $body,
        }
    };
}

impl Carray {
    /// Create an empty array of `kind`.
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Integer => Self::Integer(TypedArray::new()),
            ElementKind::Float => Self::Float(TypedArray::new()),
        }
    }

    /// Create an empty array from a type-selector code.
    pub fn with_typecode(code: char) -> Result<Self, ArrayError> {
        ElementKind::from_typecode(code).map(Self::new)
    }

    /// Build an array of `kind` from a source of values.
    ///
    /// See [`TypedArray::from_scalars`].
    pub fn from_scalars<I>(kind: ElementKind, source: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Ok(match kind {
            ElementKind::Integer => Self::Integer(TypedArray::from_scalars(source)?),
            ElementKind::Float => Self::Float(TypedArray::from_scalars(source)?),
        })
    }

    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        dispatch!(self, a => a.kind())
    }

    /// The type-selector code of the element kind.
    pub fn typecode(&self) -> char {
        self.kind().typecode()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        dispatch!(self, a => a.len())
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        dispatch!(self, a => a.capacity())
    }

    /// Bytes of element storage.
    pub fn storage_footprint(&self) -> usize {
        dispatch!(self, a => a.storage_footprint())
    }

    /// The element at `index`.
    pub fn get(&self, index: isize) -> Result<Scalar, ArrayError> {
        dispatch!(self, a => a.get(index).map(Element::to_scalar))
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: isize, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        dispatch!(self, a => a.set(index, value))
    }

    /// Validate `value` and append it.
    pub fn append(&mut self, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        dispatch!(self, a => a.append(value))
    }

    /// Validate `value` and insert it before the clamped `index`.
    pub fn insert(&mut self, index: isize, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        dispatch!(self, a => a.insert(index, value))
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: isize) -> Result<Scalar, ArrayError> {
        dispatch!(self, a => a.remove_at(index).map(Element::to_scalar))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<Scalar, ArrayError> {
        self.remove_at(-1)
    }

    /// Remove the first element numerically equal to `value`.
    pub fn remove_value(&mut self, value: &Scalar) -> Option<usize> {
        dispatch!(self, a => a.remove_value(value))
    }

    /// Borrowing iterator over the elements as host values.
    pub fn iter(&self) -> ScalarIter<'_> {
        match self {
            Self::Integer(a) => ScalarIter::Integer(a.iter()),
            Self::Float(a) => ScalarIter::Float(a.iter()),
        }
    }

    /// Restart the live cursor.
    pub fn rewind(&mut self) {
        dispatch!(self, a => a.rewind())
    }

    /// Step the live cursor. See [`TypedArray::advance`].
    pub fn advance(&mut self) -> Option<Scalar> {
        dispatch!(self, a => a.advance().map(Element::to_scalar))
    }

    /// Positional numeric equality against any sequence.
    pub fn equals<S: ScalarSequence + ?Sized>(&self, other: &S) -> bool {
        dispatch!(self, a => a.equals(other))
    }

    /// A new array of the same kind, length and capacity, reversed.
    pub fn reversed_copy(&self) -> Self {
        match self {
            Self::Integer(a) => Self::Integer(a.reversed_copy()),
            Self::Float(a) => Self::Float(a.reversed_copy()),
        }
    }
}

impl fmt::Display for Carray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, a => fmt::Display::fmt(a, f))
    }
}

impl ScalarSequence for Carray {
    fn len(&self) -> usize {
        Carray::len(self)
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        dispatch!(self, a => a.scalar_at(index))
    }
}

impl From<TypedArray<i64>> for Carray {
    fn from(array: TypedArray<i64>) -> Self {
        Self::Integer(array)
    }
}

impl From<TypedArray<f64>> for Carray {
    fn from(array: TypedArray<f64>) -> Self {
        Self::Float(array)
    }
}
