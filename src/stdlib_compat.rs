//! Standard library compatibility layer
//!
//! Provides an `Option`-returning API shaped like `std::collections::BinaryHeap`
//! on top of any [`Heap`] implementation.
//!
//! # Differences from the underlying heap
//!
//! - **Empty heap**: `peek` and `pop` return `None` instead of
//!   [`HeapError::Empty`](crate::HeapError::Empty).
//!
//! # Example
//!
//! ```rust
//! use sift_heap::stdlib_compat::StdHeap;
//! use sift_heap::{MaxHeap, MinHeap};
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, MaxHeap<i32>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//!
//! // Or as a min-heap without wrapping items in `Reverse`
//! let mut heap: StdHeap<i32, MinHeap<i32>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::Heap;

/// A `std::collections::BinaryHeap`-style wrapper
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap implementation (e.g., `MaxHeap<T>`)
pub struct StdHeap<T: Ord, H: Heap<T>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Ord, H: Heap<T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
    }

    /// Returns a reference to the top item, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.heap.top().ok()
    }

    /// Removes and returns the top item, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop_value().ok()
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: Heap<T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, H: Heap<T>> From<H> for StdHeap<T, H> {
    fn from(heap: H) -> Self {
        Self {
            heap,
            _phantom: std::marker::PhantomData,
        }
    }
}
