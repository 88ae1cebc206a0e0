//! Array-backed binary heap
//!
//! [`BinaryHeap`] stores its elements in a `Vec` laid out as a complete
//! binary tree and keeps them in heap order after every operation. The
//! ordering policy is a type parameter: [`MaxHeap`] keeps the greatest
//! element on top, [`MinHeap`] the least.
//!
//! Besides the usual push/pop, elements can be replaced by index with
//! [`BinaryHeap::insert`], which repairs the order in whichever direction the
//! new value requires.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity          |
//! |--------------------|---------------------|
//! | `push`             | O(log n) amortized  |
//! | `pop`/`pop_value`  | O(log n)            |
//! | `top`              | O(1)                |
//! | `insert`           | O(log n)            |
//! | `from_vec`         | O(n log n)          |
//! | `from_vec_linear`  | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use sift_heap::{Heap, MaxHeap};
//!
//! let mut heap = MaxHeap::from_vec(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(heap.as_slice(), &[9, 8, 5, 6, 7, 1, 4, 0, 3, 2]);
//!
//! // Replace the 5 with a 10; it rises to the root.
//! let pos = heap.iter().position(|&v| v == 5).unwrap();
//! heap.insert(pos, 10);
//! assert_eq!(heap.top(), Ok(&10));
//!
//! heap.push(11);
//! assert_eq!(heap.pop_value(), Ok(11));
//! assert_eq!(heap.pop_value(), Ok(10));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::slice;
use std::vec;

use crate::order::{Kind, Max, Min};
use crate::sift::{heapify, heapify_bottom_up, is_heap, sift_down, sift_up};
use crate::traits::{Heap, HeapError};

/// A binary heap ordered by the policy `K`
///
/// It is a logic error for an element to be modified in a way that changes
/// its ordering relative to other elements while it is in the heap, other
/// than through [`BinaryHeap::insert`].
pub struct BinaryHeap<T, K = Max> {
    /// Elements in heap order; index 0 is the top
    data: Vec<T>,
    _kind: PhantomData<fn() -> K>,
}

/// A heap with the greatest element on top
pub type MaxHeap<T> = BinaryHeap<T, Max>;

/// A heap with the least element on top
pub type MinHeap<T> = BinaryHeap<T, Min>;

impl<T: Ord, K: Kind> Heap<T> for BinaryHeap<T, K> {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            _kind: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> &mut Self {
        self.data.push(item);
        let last = self.data.len() - 1;
        let settled = sift_up::<T, K>(&mut self.data, last);
        self.check_settled(settled);
        self
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn pop_value(&mut self) -> Result<T, HeapError> {
        let last = self.data.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.data.swap(0, last);
        let result = self.data.pop().ok_or(HeapError::Empty)?;

        let len = self.data.len();
        if len > 0 {
            let settled = sift_down::<T, K>(&mut self.data, len, 0);
            self.check_settled(settled);
        }

        Ok(result)
    }
}

impl<T: Ord, K: Kind> BinaryHeap<T, K> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _kind: PhantomData,
        }
    }

    /// Builds a heap from an arbitrary vector by sifting up each element in turn
    ///
    /// The vector's allocation is reused. O(n log n).
    pub fn from_vec(mut data: Vec<T>) -> Self {
        heapify::<T, K>(&mut data);
        Self {
            data,
            _kind: PhantomData,
        }
    }

    /// Builds a heap from an arbitrary vector with a bottom-up sweep
    ///
    /// O(n), but the resulting element layout differs from [`from_vec`](Self::from_vec).
    pub fn from_vec_linear(mut data: Vec<T>) -> Self {
        heapify_bottom_up::<T, K>(&mut data);
        Self {
            data,
            _kind: PhantomData,
        }
    }

    /// Replaces the element at `position`, or pushes if `position == len()`
    ///
    /// The new value moves toward the top if it outranks the value it
    /// replaces and toward the leaves otherwise. A value equal to the old one
    /// is written in place without moving anything, so refreshing an element
    /// never reorders the heap.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert(&mut self, position: usize, value: T) -> &mut Self {
        if position == self.data.len() {
            return self.push(value);
        }

        let slot = &mut self.data[position];
        if *slot == value {
            *slot = value;
            return self;
        }

        let rises = K::dominates(&value, &*slot);
        *slot = value;

        let len = self.data.len();
        let settled = if rises {
            sift_up::<T, K>(&mut self.data, position)
        } else {
            sift_down::<T, K>(&mut self.data, len, position)
        };
        self.check_settled(settled);
        self
    }

    /// Returns true if every element satisfies the heap order
    ///
    /// Always true for a heap built through this API; O(n).
    pub fn is_valid(&self) -> bool {
        is_heap::<T, K>(&self.data)
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        crate::sort::heap_sort_ascending(&mut data);
        data
    }

    /// Verifies the element at `pos` against its parent and children (debug only)
    #[inline]
    fn check_settled(&self, pos: usize) {
        if !cfg!(debug_assertions) {
            return;
        }

        let len = self.data.len();
        if pos > 0 {
            let parent = (pos - 1) / 2;
            assert!(
                !K::dominates(&self.data[pos], &self.data[parent]),
                "heap order violated: index {} outranks its parent {}",
                pos,
                parent
            );
        }
        for child in [2 * pos + 1, 2 * pos + 2] {
            if child < len {
                assert!(
                    !K::dominates(&self.data[child], &self.data[pos]),
                    "heap order violated: child {} outranks index {}",
                    child,
                    pos
                );
            }
        }
    }
}

impl<T, K> BinaryHeap<T, K> {
    /// Returns the element at a raw backing index
    ///
    /// Only index 0 has a defined meaning (the top); other positions follow
    /// the tree layout, not sorted order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns an iterator over the backing elements in tree order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the backing elements in tree order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap and returns the backing vector in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, K> Index<usize> for BinaryHeap<T, K> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Ord, K: Kind> Default for BinaryHeap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, K> Clone for BinaryHeap<T, K> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: fmt::Debug, K> fmt::Debug for BinaryHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord, K: Kind> From<Vec<T>> for BinaryHeap<T, K> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord + Clone, K: Kind> From<&[T]> for BinaryHeap<T, K> {
    fn from(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }
}

impl<T: Ord, K: Kind, const N: usize> From<[T; N]> for BinaryHeap<T, K> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T, K> From<BinaryHeap<T, K>> for Vec<T> {
    fn from(heap: BinaryHeap<T, K>) -> Self {
        heap.data
    }
}

impl<T: Ord, K: Kind> FromIterator<T> for BinaryHeap<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, K: Kind> Extend<T> for BinaryHeap<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, K> IntoIterator for &'a BinaryHeap<T, K> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, K> IntoIterator for BinaryHeap<T, K> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the elements in tree order, not sorted order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<K: Kind>(heap: &mut BinaryHeap<i32, K>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(value) = heap.pop_value() {
            out.push(value);
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = MaxHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3).push(1).push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.top(), Ok(&3));

        assert_eq!(heap.pop_value(), Ok(3));
        assert_eq!(heap.pop_value(), Ok(2));
        assert_eq!(heap.pop_value(), Ok(1));
        assert_eq!(heap.pop_value(), Err(HeapError::Empty));
    }

    #[test]
    fn test_empty_errors() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.top(), Err(HeapError::Empty));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert_eq!(heap.pop_value(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_pop_discards_top() {
        let mut heap = MinHeap::from_vec(vec![4, 2, 8]);
        assert_eq!(heap.pop(), Ok(()));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.top(), Ok(&4));
    }

    #[test]
    fn test_construction_layout() {
        let heap = MaxHeap::from_vec((0..10).collect());
        assert_eq!(heap.as_slice(), &[9, 8, 5, 6, 7, 1, 4, 0, 3, 2]);
        assert_eq!(heap[0], 9);
        assert_eq!(heap.get(9), Some(&2));
        assert_eq!(heap.get(10), None);
    }

    #[test]
    fn test_linear_construction() {
        let mut heap = MaxHeap::from_vec_linear((0..10).collect());
        assert!(heap.is_valid());
        assert_eq!(drain(&mut heap), vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_insert_at_end_pushes() {
        let mut heap = MaxHeap::from_vec(vec![1, 2, 3]);
        let end = heap.len();
        heap.insert(end, 10);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.top(), Ok(&10));
    }

    #[test]
    fn test_insert_rises() {
        let mut heap = MaxHeap::from_vec((0..10).collect());
        let pos = heap.iter().position(|&v| v == 5).unwrap();
        heap.insert(pos, 10);
        assert_eq!(heap.len(), 10);
        assert!(heap.is_valid());
        assert_eq!(drain(&mut heap), vec![10, 9, 8, 7, 6, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_insert_sinks() {
        let mut heap = MaxHeap::from_vec((0..10).collect());
        let pos = heap.iter().position(|&v| v == 5).unwrap();
        heap.insert(pos, -1);
        assert!(heap.is_valid());
        assert_eq!(drain(&mut heap), vec![9, 8, 7, 6, 4, 3, 2, 1, 0, -1]);
    }

    #[test]
    fn test_insert_equal_keeps_layout() {
        let mut heap = MinHeap::from_vec(vec![5, 3, 9, 1, 7]);
        let before = heap.as_slice().to_vec();
        heap.insert(2, before[2]);
        assert_eq!(heap.as_slice(), before.as_slice());
    }

    #[test]
    #[should_panic]
    fn test_insert_past_end_panics() {
        let mut heap = MaxHeap::from_vec(vec![1, 2, 3]);
        heap.insert(4, 0);
    }

    #[test]
    fn test_min_heap_order() {
        let mut heap: MinHeap<i32> = (0..10).rev().collect();
        assert_eq!(drain(&mut heap), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_extend_and_clear() {
        let mut heap = MaxHeap::with_capacity(8);
        assert!(heap.capacity() >= 8);
        heap.extend([4, 9, 1]);
        assert_eq!(heap.top(), Ok(&9));
        heap.clear();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = MinHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_conversions() {
        let heap: MaxHeap<i32> = [2, 7, 4].into();
        assert_eq!(heap.top(), Ok(&7));

        let from_slice: MaxHeap<i32> = MaxHeap::from(&[2, 7, 4][..]);
        assert_eq!(from_slice.as_slice(), heap.as_slice());

        let cloned = heap.clone();
        let back: Vec<i32> = heap.into();
        assert_eq!(back, cloned.into_vec());
    }

    #[test]
    fn test_debug_format() {
        let heap = MaxHeap::from_vec(vec![1, 2, 3]);
        assert_eq!(format!("{:?}", heap), "[3, 1, 2]");
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MaxHeap::new();
        heap.push(1).push(1).push(1);
        assert_eq!(drain(&mut heap), vec![1, 1, 1]);
    }
}
