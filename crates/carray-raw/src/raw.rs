//! Manually managed, exactly sized element storage.
//!
//! [`RawBuffer`] owns an allocation of exactly `capacity` slots. Unlike
//! `Vec`, it never rounds capacity up and never tracks which slots are
//! initialized; the owner keeps that count and uses the `unsafe` prefix
//! accessors to view the initialized part.

#![allow(unsafe_code)]

use std::alloc::{alloc, dealloc, handle_alloc_error, realloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

/// An owned buffer of exactly `capacity` possibly-uninitialized slots.
///
/// Restricted to `Copy` element types so that resizing and dropping never
/// need to run element destructors. A zero-capacity buffer holds no
/// allocation.
pub struct RawBuffer<T: Copy> {
    ptr: NonNull<MaybeUninit<T>>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation, like Vec<T>.
unsafe impl<T: Copy + Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out shared slices.
unsafe impl<T: Copy + Sync> Sync for RawBuffer<T> {}

impl<T: Copy> RawBuffer<T> {
    /// Create an empty, unallocated buffer.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Create a buffer with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        buf.resize(capacity);
        buf
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer currently holds a heap allocation.
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0 && mem::size_of::<T>() != 0
    }

    /// Size of the slots in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * mem::size_of::<T>()
    }

    /// All slots, initialized or not.
    pub fn slots(&self) -> &[MaybeUninit<T>] {
        // SAFETY: ptr is valid for `capacity` slots (or dangling and
        // well-aligned when capacity is zero); MaybeUninit needs no init.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// All slots, initialized or not, mutably.
    pub fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: as in `slots`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// View the first `len` slots as initialized elements.
    ///
    /// # Safety
    ///
    /// `len <= capacity` and slots `0..len` must all have been written.
    pub unsafe fn prefix(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity);
        // SAFETY: upheld by the caller; MaybeUninit<T> has T's layout.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast::<T>(), len) }
    }

    /// View the first `len` slots as initialized elements, mutably.
    ///
    /// # Safety
    ///
    /// `len <= capacity` and slots `0..len` must all have been written.
    pub unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity);
        // SAFETY: upheld by the caller; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<T>(), len) }
    }

    /// Reallocate to exactly `new_capacity` slots.
    ///
    /// Slots below `min(old, new)` keep their contents; slots added by
    /// growth are uninitialized. Resizing to zero frees the allocation.
    /// Aborts through [`handle_alloc_error`] if memory cannot be obtained.
    pub fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity;
        if new_capacity == old_capacity {
            return;
        }
        if mem::size_of::<T>() != 0 {
            if new_capacity == 0 {
                // SAFETY: old_capacity != 0, so ptr came from `alloc`/`realloc`
                // with exactly this layout.
                unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout(old_capacity)) };
                self.ptr = NonNull::dangling();
            } else {
                let new_layout = Self::layout(new_capacity);
                let raw = if old_capacity == 0 {
                    // SAFETY: new_layout has non-zero size.
                    unsafe { alloc(new_layout) }
                } else {
                    // SAFETY: ptr was allocated with the old layout, the
                    // alignment is unchanged, and `Layout::array` already
                    // rejected sizes that overflow isize.
                    unsafe {
                        realloc(
                            self.ptr.as_ptr().cast(),
                            Self::layout(old_capacity),
                            new_layout.size(),
                        )
                    }
                };
                self.ptr = match NonNull::new(raw.cast::<MaybeUninit<T>>()) {
                    Some(ptr) => ptr,
                    None => handle_alloc_error(new_layout),
                };
            }
        }
        self.capacity = new_capacity;
        tracing::trace!(old_capacity, new_capacity, "raw buffer resized");
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }
}

impl<T: Copy> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // SAFETY: allocated with this layout; elements are Copy, so
            // there is nothing to drop in place.
            unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout(self.capacity)) };
        }
    }
}

impl<T: Copy> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fill(buf: &mut RawBuffer<i64>, len: usize) {
        for (i, slot) in buf.slots_mut()[..len].iter_mut().enumerate() {
            slot.write(i as i64 * 10);
        }
    }

    #[test]
    fn new_buffer_is_unallocated() {
        let buf = RawBuffer::<f64>::new();
        assert_eq!(buf.capacity(), 0);
        assert!(!buf.is_allocated());
        assert!(buf.slots().is_empty());
        assert_eq!(buf.memory_bytes(), 0);
    }

    #[test]
    fn with_capacity_is_exact() {
        let buf = RawBuffer::<i64>::with_capacity(7);
        assert_eq!(buf.capacity(), 7);
        assert_eq!(buf.slots().len(), 7);
        assert_eq!(buf.memory_bytes(), 56);
        assert!(buf.is_allocated());
    }

    #[test]
    fn growth_preserves_contents() {
        let mut buf = RawBuffer::<i64>::with_capacity(3);
        fill(&mut buf, 3);
        buf.resize(7);
        assert_eq!(buf.capacity(), 7);
        // SAFETY: first three slots written above.
        assert_eq!(unsafe { buf.prefix(3) }, &[0, 10, 20]);
    }

    #[test]
    fn shrink_preserves_prefix() {
        let mut buf = RawBuffer::<i64>::with_capacity(8);
        fill(&mut buf, 8);
        buf.resize(2);
        assert_eq!(buf.capacity(), 2);
        // SAFETY: slots 0 and 1 were written before the shrink.
        assert_eq!(unsafe { buf.prefix(2) }, &[0, 10]);
    }

    #[test]
    fn resize_to_zero_frees() {
        let mut buf = RawBuffer::<f64>::with_capacity(4);
        buf.resize(0);
        assert!(!buf.is_allocated());
        assert_eq!(buf.capacity(), 0);
        // Reallocating after a free starts from scratch.
        buf.resize(1);
        assert!(buf.is_allocated());
    }

    #[test]
    fn prefix_mut_writes_are_visible() {
        let mut buf = RawBuffer::<i64>::with_capacity(2);
        fill(&mut buf, 2);
        // SAFETY: both slots written.
        unsafe { buf.prefix_mut(2)[1] = 99 };
        assert_eq!(unsafe { buf.prefix(2) }, &[0, 99]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn oversized_layout_panics() {
        let _ = RawBuffer::<i64>::with_capacity(usize::MAX / 4);
    }

    proptest! {
        #[test]
        fn resizes_keep_common_prefix(sizes in proptest::collection::vec(0usize..64, 1..12)) {
            let mut buf = RawBuffer::<i64>::new();
            let mut live = 0usize;
            for size in sizes {
                buf.resize(size);
                live = live.min(size);
                // SAFETY: the first `live` slots were written by earlier rounds.
                let prefix = unsafe { buf.prefix(live) }.to_vec();
                for (i, v) in prefix.iter().enumerate() {
                    prop_assert_eq!(*v, i as i64 * 10);
                }
                fill(&mut buf, size);
                live = size;
                prop_assert_eq!(buf.capacity(), size);
                prop_assert_eq!(buf.is_allocated(), size != 0);
            }
        }
    }
}
