//! Ordering policies for binary heaps
//!
//! A heap is parameterized over a [`Kind`] marker that decides which element
//! belongs closer to the root:
//!
//! - [`Max`]: the greatest element is at the root (`a > b` moves `a` up)
//! - [`Min`]: the least element is at the root (`a < b` moves `a` up)
//!
//! The policy is a zero-sized type parameter, so it is fixed for the lifetime
//! of a heap and costs nothing at runtime.

use core::cmp::Ordering;

/// Max-heap ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Max {}

/// Min-heap ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Min {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Max {}
    impl Sealed for super::Min {}
}

/// The binary heap kind: max-heap or min-heap
///
/// This trait is sealed; [`Max`] and [`Min`] are the only implementations.
pub trait Kind: sealed::Sealed {
    /// The ordering `a.cmp(b)` must produce for `a` to sit above `b`
    fn ordering() -> Ordering;

    /// Returns true if `a` strictly belongs above `b`
    ///
    /// Equal elements never dominate each other, so sifting never swaps them.
    #[inline]
    fn dominates<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
        a.cmp(b) == Self::ordering()
    }
}

impl Kind for Max {
    #[inline]
    fn ordering() -> Ordering {
        Ordering::Greater
    }
}

impl Kind for Min {
    #[inline]
    fn ordering() -> Ordering {
        Ordering::Less
    }
}
