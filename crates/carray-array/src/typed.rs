//! The monomorphized typed growable array.

use std::fmt;

use carray_core::{ArrayError, Element, ElementKind, Scalar, ScalarSequence};
use carray_raw::{CapacityPolicy, RawBuffer};

use crate::iter::Iter;

/// A resizable sequence of one element type with exact capacity control.
///
/// `len <= capacity` always holds, and only the first `len` slots are
/// initialized. Capacity follows [`CapacityPolicy`]: it grows to
/// `2 * capacity + 1` when full and shrinks to exactly `len` after a
/// removal leaves the array at most half full.
///
/// Indices are `isize`. A negative index `i` resolves to `len + i`.
/// Accessors and removals reject resolved indices outside `[0, len)`;
/// [`insert`](Self::insert) clamps instead.
///
/// Besides the borrowing [`iter`](Self::iter), the array carries one
/// live cursor ([`rewind`](Self::rewind) / [`advance`](Self::advance))
/// that reads whatever is stored at its position at each step, so
/// mutations between steps are observed.
///
/// # Examples
///
/// ```
/// use carray_array::TypedArray;
///
/// let mut a = TypedArray::<i64>::from_scalars([3, 1, 2]).unwrap();
/// a.append(5).unwrap();
/// a.insert(-1, 9).unwrap();
/// assert_eq!(a.as_slice(), &[3, 1, 2, 9, 5]);
/// assert_eq!(a.pop().unwrap(), 5);
/// assert_eq!(a.to_string(), "typed_array<integer>(3, 1, 2, 9)");
/// ```
pub struct TypedArray<E: Element> {
    buf: RawBuffer<E>,
    len: usize,
    cursor: usize,
}

impl<E: Element> TypedArray<E> {
    /// Create an empty array with no storage.
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            cursor: 0,
        }
    }

    /// Build an array from a source, validating every value in order.
    ///
    /// The final capacity equals the number of values. The first value
    /// that fails validation aborts construction and the partially filled
    /// storage is released.
    pub fn from_scalars<I>(source: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let source = source.into_iter();
        let mut array = Self {
            buf: RawBuffer::with_capacity(source.size_hint().0),
            len: 0,
            cursor: 0,
        };
        for value in source {
            let value = value.into();
            match E::validate(&value) {
                Ok(element) => array.push(element),
                Err(err) => {
                    tracing::debug!(kind = E::KIND.tag(), index = array.len, "construction aborted");
                    return Err(err);
                }
            }
        }
        // An iterator that under-reported its length left spare slots.
        array.buf.resize(array.len);
        Ok(array)
    }

    /// Copy already-typed elements into a new array with capacity `len`.
    pub fn from_slice(elements: &[E]) -> Self {
        let mut array = Self {
            buf: RawBuffer::with_capacity(elements.len()),
            len: 0,
            cursor: 0,
        };
        for (slot, &element) in array.buf.slots_mut().iter_mut().zip(elements) {
            slot.write(element);
        }
        array.len = elements.len();
        array
    }

    /// The element kind, fixed for every array of this type.
    pub fn kind(&self) -> ElementKind {
        E::KIND
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Bytes of element storage: `capacity * element_size`.
    pub fn storage_footprint(&self) -> usize {
        self.buf.memory_bytes()
    }

    /// The initialized elements.
    #[allow(unsafe_code)]
    pub fn as_slice(&self) -> &[E] {
        // SAFETY: slots `0..len` are written before `len` is raised, and
        // `len <= capacity` is maintained by every mutator.
        unsafe { self.buf.prefix(self.len) }
    }

    #[allow(unsafe_code)]
    fn as_mut_slice(&mut self) -> &mut [E] {
        // SAFETY: as in `as_slice`.
        unsafe { self.buf.prefix_mut(self.len) }
    }

    /// Resolve a possibly negative index without bounds checking.
    fn resolve(&self, index: isize) -> Option<usize> {
        if index >= 0 {
            Some(index as usize)
        } else {
            self.len.checked_add_signed(index)
        }
    }

    /// Resolve `index` and require it to address a live element.
    fn checked_index(&self, index: isize) -> Result<usize, ArrayError> {
        match self.resolve(index) {
            Some(i) if i < self.len => Ok(i),
            _ => Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Resolve `index` and clamp it into `[0, len]`.
    fn clamped_index(&self, index: isize) -> usize {
        self.resolve(index).map_or(0, |i| i.min(self.len))
    }

    /// The element at `index`.
    pub fn get(&self, index: isize) -> Result<E, ArrayError> {
        let i = self.checked_index(index)?;
        Ok(E::read(self.as_slice(), i))
    }

    /// Overwrite the element at `index`.
    ///
    /// The index is checked before the value is validated; neither failure
    /// modifies the array.
    pub fn set(&mut self, index: isize, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        let i = self.checked_index(index)?;
        let element = E::validate(&value.into())?;
        E::write(self.as_mut_slice(), i, element);
        Ok(())
    }

    /// Validate `value` and append it.
    pub fn append(&mut self, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        let element = E::validate(&value.into())?;
        self.push(element);
        Ok(())
    }

    /// Append an already-typed element.
    pub fn push(&mut self, element: E) {
        self.reserve_one();
        self.buf.slots_mut()[self.len].write(element);
        self.len += 1;
    }

    /// Validate `value` and insert it before `index`.
    ///
    /// The index is resolved and then clamped into `[0, len]`, so indices
    /// past either end insert at that end. Validation runs before any
    /// change to the array.
    pub fn insert(&mut self, index: isize, value: impl Into<Scalar>) -> Result<(), ArrayError> {
        let element = E::validate(&value.into())?;
        let i = self.clamped_index(index);
        self.reserve_one();
        // Initialize the claimed slot so the shift sees `len + 1` elements.
        self.buf.slots_mut()[self.len].write(element);
        let old_len = self.len;
        self.len += 1;
        E::shift_insert(self.as_mut_slice(), i, element, old_len);
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: isize) -> Result<E, ArrayError> {
        let i = self.checked_index(index)?;
        let len = self.len;
        let removed = E::shift_remove(self.as_mut_slice(), i, len);
        self.len -= 1;
        self.shrink_to_policy();
        Ok(removed)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<E, ArrayError> {
        self.remove_at(-1)
    }

    /// Remove the first element numerically equal to `value`.
    ///
    /// Returns the index it was removed from, or `None` if nothing matched.
    pub fn remove_value(&mut self, value: &Scalar) -> Option<usize> {
        let i = self
            .as_slice()
            .iter()
            .position(|&element| element.to_scalar() == *value)?;
        self.remove_at(i as isize).ok().map(|_| i)
    }

    /// Borrowing iterator over the elements.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.as_slice())
    }

    /// Restart the live cursor at the first element.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Read the element under the live cursor and step past it.
    ///
    /// Reads the current contents at the cursor position, so insertions
    /// and removals since the previous step shift what is seen. Returns
    /// `None` once the cursor reaches the current length.
    pub fn advance(&mut self) -> Option<E> {
        if self.cursor < self.len {
            let element = E::read(self.as_slice(), self.cursor);
            self.cursor += 1;
            Some(element)
        } else {
            None
        }
    }

    /// Positional numeric equality against any sequence.
    ///
    /// Lengths are compared first. Elements compare through [`Scalar`], so
    /// an integer array equals a sequence of integral floats.
    pub fn equals<S: ScalarSequence + ?Sized>(&self, other: &S) -> bool {
        if self.len != other.len() {
            return false;
        }
        self.iter()
            .enumerate()
            .all(|(i, element)| other.scalar_at(i) == Some(element.to_scalar()))
    }

    /// A new array with the elements in reverse order.
    ///
    /// The copy has the same length and capacity; `self` is unchanged.
    pub fn reversed_copy(&self) -> Self {
        let mut copy = self.clone();
        E::fill_reversed(copy.as_mut_slice(), self.as_slice());
        copy
    }

    fn reserve_one(&mut self) {
        let capacity = self.buf.capacity();
        if CapacityPolicy::needs_growth(self.len, capacity) {
            self.buf.resize(CapacityPolicy::grown(capacity));
        }
    }

    fn shrink_to_policy(&mut self) {
        if let Some(capacity) = CapacityPolicy::shrunk(self.len, self.buf.capacity()) {
            self.buf.resize(capacity);
        }
    }
}

impl<E: Element> Default for TypedArray<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Clone for TypedArray<E> {
    /// Copies elements and capacity; the live cursor starts fresh.
    fn clone(&self) -> Self {
        let mut copy = Self {
            buf: RawBuffer::with_capacity(self.capacity()),
            len: 0,
            cursor: 0,
        };
        for (slot, &element) in copy.buf.slots_mut().iter_mut().zip(self.as_slice()) {
            slot.write(element);
        }
        copy.len = self.len;
        copy
    }
}

impl<E: Element> PartialEq for TypedArray<E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<E: Element> fmt::Debug for TypedArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("kind", &E::KIND)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<E: Element> fmt::Display for TypedArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typed_array<{}>(", E::render_tag())?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element.to_scalar())?;
        }
        f.write_str(")")
    }
}

impl<E: Element> ScalarSequence for TypedArray<E> {
    fn len(&self) -> usize {
        self.len
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        self.as_slice().get(index).map(|&element| element.to_scalar())
    }
}

impl<'a, E: Element> IntoIterator for &'a TypedArray<E> {
    type Item = E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
