//! Boundary search over sorted sequences.
//!
//! Finds the leftmost position whose element is not less than the target,
//! and reports it only if that element equals the target. Unlike
//! [`slice::binary_search`], duplicates always resolve to the first
//! occurrence.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Leftmost-match binary search driven by a fallible comparator.
///
/// `compare(i)` orders the element at `i` against the target. Host adapters
/// use the error channel to surface comparison failures from the host's
/// own ordering. Incomparable pairs (`None` from a partial order) should be
/// reported as [`Ordering::Greater`] so the search stays within bounds.
///
/// Returns `Ok(None)` for an empty sequence or a missing target.
pub fn binary_search_by<F, E>(len: usize, mut compare: F) -> Result<Option<usize>, E>
where
    F: FnMut(usize) -> Result<Ordering, E>,
{
    if len == 0 {
        return Ok(None);
    }
    let mut left = 0;
    let mut right = len - 1;
    while left < right {
        let mid = left + (right - left) / 2;
        if compare(mid)? == Ordering::Less {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    if compare(left)? == Ordering::Equal {
        Ok(Some(left))
    } else {
        Ok(None)
    }
}

/// Leftmost-match binary search over a sorted slice.
///
/// # Examples
///
/// ```
/// use carray_core::binary_search;
///
/// assert_eq!(binary_search(&[1, 2, 2, 2, 5], &2), Some(1));
/// assert_eq!(binary_search(&[1, 2, 5], &3), None);
/// ```
pub fn binary_search<T: PartialOrd>(items: &[T], target: &T) -> Option<usize> {
    let found = binary_search_by(items.len(), |i| {
        Ok::<_, Infallible>(items[i].partial_cmp(target).unwrap_or(Ordering::Greater))
    });
    match found {
        Ok(index) => index,
        Err(never) => match never {},
    }
}
