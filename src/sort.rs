//! In-place heap sort
//!
//! Sorts a slice in O(n log n) time with O(1) extra space. The slice is
//! first arranged into a heap; the top is then repeatedly moved to the end of
//! the shrinking live range, so a max-heap leaves the slice ascending and a
//! min-heap leaves it descending.
//!
//! To sort only part of a buffer, pass a sub-slice:
//!
//! ```rust
//! use sift_heap::sort::heap_sort_ascending;
//!
//! let mut data = [5, 9, 8, 7, 1, 0];
//! heap_sort_ascending(&mut data[1..4]);
//! assert_eq!(data, [5, 7, 8, 9, 1, 0]);
//! ```

use crate::order::{Kind, Max, Min};
use crate::sift::{heapify, sift_down};

/// Sorts `data` so that the elements `K` ranks highest end up last
///
/// With [`Max`] the result is ascending; with [`Min`] it is descending.
pub fn heap_sort<T: Ord, K: Kind>(data: &mut [T]) {
    if data.is_empty() {
        return;
    }

    heapify::<T, K>(data);

    let mut end = data.len();
    while end > 1 {
        end -= 1;
        // The top moves into the slot vacated at the end of the live range.
        data.swap(0, end);
        sift_down::<T, K>(data, end, 0);
    }
}

/// Sorts `data` into non-decreasing order
///
/// ```rust
/// use sift_heap::heap_sort_ascending;
///
/// let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
/// heap_sort_ascending(&mut data);
/// assert_eq!(data, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn heap_sort_ascending<T: Ord>(data: &mut [T]) {
    heap_sort::<T, Max>(data);
}

/// Sorts `data` into non-increasing order
pub fn heap_sort_descending<T: Ord>(data: &mut [T]) {
    heap_sort::<T, Min>(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        heap_sort_ascending(&mut data);
        assert_eq!(data, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_descending() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        heap_sort_descending(&mut data);
        assert_eq!(data, vec![9, 6, 5, 5, 5, 4, 3, 3, 2, 1, 1]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        heap_sort_ascending(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        heap_sort_descending(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_idempotent() {
        let mut data: Vec<i32> = (0..50).map(|i| (i * 37) % 23).collect();
        heap_sort_ascending(&mut data);
        let once = data.clone();
        heap_sort_ascending(&mut data);
        assert_eq!(data, once);
    }

    #[test]
    fn test_strings() {
        let mut words = ["pear", "apple", "fig", "banana"];
        heap_sort_ascending(&mut words);
        assert_eq!(words, ["apple", "banana", "fig", "pear"]);
    }
}
