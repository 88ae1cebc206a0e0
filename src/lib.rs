//! Array-backed binary heaps for Rust
//!
//! This crate provides a binary max-heap / min-heap stored in a `Vec`, the
//! sift primitives it is built from, and an in-place heap sort that reuses
//! them.
//!
//! # Features
//!
//! - **[`BinaryHeap`]**: O(log n) push, pop and positional update; O(1) top.
//!   The ordering policy ([`Max`] or [`Min`]) is a type parameter.
//! - **[`sift`]**: `sift_up`, `sift_down`, `heapify` over plain slices
//! - **[`sort`]**: O(n log n), O(1)-space heap sort in both directions
//! - **[`StdHeap`](stdlib_compat::StdHeap)**: an `Option`-returning wrapper
//!   shaped like `std::collections::BinaryHeap`
//! - **`serde`** (optional feature): serialize/deserialize heaps as sequences
//!
//! # Example
//!
//! ```rust
//! use sift_heap::{binary_heap, Heap, MaxHeap};
//!
//! let mut heap: MaxHeap<i32> = binary_heap![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! heap.push(10);
//!
//! let mut drained = Vec::new();
//! while let Ok(value) = heap.pop_value() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
//! ```

pub mod binary;
pub mod order;
pub mod sift;
pub mod sort;
pub mod stdlib_compat;
pub mod traits;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use order::{Kind, Max, Min};
pub use sort::{heap_sort_ascending, heap_sort_descending};
pub use traits::{Heap, HeapError};

/// Creates a [`BinaryHeap`] from a list of values, heapifying them
///
/// The ordering comes from the annotated type:
///
/// ```rust
/// use sift_heap::{binary_heap, Heap, MinHeap};
///
/// let heap: MinHeap<i32> = binary_heap![4, 1, 3];
/// assert_eq!(heap.top(), Ok(&1));
/// ```
#[macro_export]
macro_rules! binary_heap {
    () => {
        $crate::BinaryHeap::from_vec(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::BinaryHeap::from_vec(::std::vec![$($value),+])
    };
}
