//! Heap repair primitives over plain slices
//!
//! These functions operate on any `&mut [T]` laid out as a complete binary
//! tree in array form:
//!
//! ```text
//!  index:   0 1 2 3 4 5 6 7 8 9
//!  left(i)   = 2i + 1
//!  right(i)  = 2i + 2
//!  parent(i) = (i - 1) / 2
//!
//!               0
//!          1         2
//!       3     4   5     6
//!      7 8   9
//! ```
//!
//! They are shared by [`BinaryHeap`](crate::binary::BinaryHeap) and by the
//! in-place sorts in [`sort`](crate::sort), and are public so callers can
//! maintain heap order over their own buffers.
//!
//! # Time Complexity
//!
//! | Function             | Complexity |
//! |----------------------|------------|
//! | `sift_up`            | O(log n)   |
//! | `sift_down`          | O(log n)   |
//! | `heapify`            | O(n log n) |
//! | `heapify_bottom_up`  | O(n)       |
//! | `is_heap`            | O(n)       |

use crate::order::Kind;

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Moves the element at `pos` toward the root until its parent dominates it
///
/// The slice must satisfy the heap invariant everywhere except possibly
/// between `pos` and its ancestors. Returns the index the element settled at.
pub fn sift_up<T: Ord, K: Kind>(data: &mut [T], mut pos: usize) -> usize {
    debug_assert!(pos < data.len(), "sift_up position {} out of range", pos);

    while pos > 0 {
        let up = parent(pos);
        if K::dominates(&data[pos], &data[up]) {
            data.swap(pos, up);
            pos = up;
        } else {
            break;
        }
    }
    pos
}

/// Moves the element at `pos` toward the leaves until neither child dominates it
///
/// Only `data[..end]` is treated as part of the heap; elements at or past
/// `end` are ignored. The subtrees rooted at both children of `pos` must
/// already be valid heaps within that range. Returns the index the element
/// settled at.
pub fn sift_down<T: Ord, K: Kind>(data: &mut [T], end: usize, mut pos: usize) -> usize {
    debug_assert!(end <= data.len(), "logical end {} exceeds length {}", end, data.len());
    debug_assert!(pos < end, "sift_down position {} out of range {}", pos, end);

    loop {
        let left = left_child(pos);
        let right = right_child(pos);
        let mut top = pos;

        if left < end && K::dominates(&data[left], &data[top]) {
            top = left;
        }
        if right < end && K::dominates(&data[right], &data[top]) {
            top = right;
        }

        if top == pos {
            return pos;
        }

        data.swap(pos, top);
        pos = top;
    }
}

/// Arranges `data` into a heap by sifting up every element left to right
///
/// Runs in O(n log n). For input `[0, 1, ..., 9]` under [`Max`](crate::order::Max)
/// this yields `[9, 8, 5, 6, 7, 1, 4, 0, 3, 2]`; containers rely on that
/// layout being reproducible.
pub fn heapify<T: Ord, K: Kind>(data: &mut [T]) {
    for pos in 1..data.len() {
        sift_up::<T, K>(data, pos);
    }
}

/// Arranges `data` into a heap by sifting down every internal node, last first
///
/// Runs in O(n). The resulting layout is a valid heap but generally differs
/// from the one produced by [`heapify`].
pub fn heapify_bottom_up<T: Ord, K: Kind>(data: &mut [T]) {
    let len = data.len();
    for pos in (0..len / 2).rev() {
        sift_down::<T, K>(data, len, pos);
    }
}

/// Returns true if no element of `data` dominates its parent
pub fn is_heap<T: Ord, K: Kind>(data: &[T]) -> bool {
    (1..data.len()).all(|pos| !K::dominates(&data[pos], &data[parent(pos)]))
}
