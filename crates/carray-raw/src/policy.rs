//! Capacity growth and shrink formulas.

/// The reallocation policy for typed arrays.
///
/// Both formulas are observable through the storage footprint and are
/// reproduced exactly:
///
/// - **Growth:** when one more slot is needed, capacity becomes
///   `2 * capacity + 1`, which also grows an empty buffer.
/// - **Shrink:** after every removal, if `len <= capacity / 2` the
///   capacity becomes exactly `len`. This is eager, so alternating
///   appends and removals around the threshold reallocate each time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapacityPolicy;

impl CapacityPolicy {
    /// Capacity after a growth step from `capacity`.
    ///
    /// # Panics
    ///
    /// Panics on arithmetic overflow, like `Vec` does.
    pub fn grown(capacity: usize) -> usize {
        capacity
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .expect("capacity overflow")
    }

    /// Whether a buffer of `capacity` holding `len` elements must grow
    /// before one more element is written.
    pub fn needs_growth(len: usize, capacity: usize) -> bool {
        len >= capacity
    }

    /// Capacity to shrink to after a removal, or `None` to keep it.
    pub fn shrunk(len: usize, capacity: usize) -> Option<usize> {
        (len <= capacity / 2 && len != capacity).then_some(len)
    }
}
