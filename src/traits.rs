//! Common traits for heap data structures
//!
//! - [`Heap`]: the container interface shared by heap implementations
//! - [`HeapError`]: the error returned when an operation needs an element
//!   that isn't there
//!
//! Unlike `std::collections::BinaryHeap`, reading or removing the top of an
//! empty heap is reported as an error rather than `None`: it is a contract
//! violation the caller can always avoid by checking [`Heap::is_empty`]
//! first. For an `Option`-returning API, see
//! [`StdHeap`](crate::stdlib_compat::StdHeap).

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element, but the heap is empty
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The *top* element is the greatest one for a max-heap and the least one
/// for a min-heap.
///
/// # Example
///
/// ```rust
/// use sift_heap::{Heap, HeapError, MaxHeap};
///
/// let mut heap: MaxHeap<i32> = Heap::new();
/// assert_eq!(heap.top(), Err(HeapError::Empty));
///
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.top(), Ok(&7));
/// assert_eq!(heap.pop_value(), Ok(7));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (the backing storage may grow).
    fn push(&mut self, item: T) -> &mut Self;

    /// Returns the top element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes the top element, discarding it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. Nothing is
    /// modified in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<(), HeapError> {
        self.pop_value().map(drop)
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. Nothing is
    /// modified in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_value(&mut self) -> Result<T, HeapError>;
}
