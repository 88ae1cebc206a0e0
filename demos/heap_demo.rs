//! Walkthrough of the max-heap scenarios over `[0, 1, ..., 9]`
//!
//! ## Running
//!
//! ```bash
//! cargo run --example heap_demo
//! ```

use sift_heap::{heap_sort_ascending, Heap, HeapError, MaxHeap};
use std::fmt::Display;

const INIT: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const HEAPIFIED: [i32; 10] = [9, 8, 5, 6, 7, 1, 4, 0, 3, 2];

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drains the heap, printing each value and checking it against `expected`
fn extract(heap: &mut MaxHeap<i32>, expected: &[i32]) -> Result<(), HeapError> {
    let mut popped = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        popped.push(heap.pop_value()?);
    }
    println!("{}", join(&popped));
    assert_eq!(popped, expected);
    Ok(())
}

fn replace(heap: &mut MaxHeap<i32>, old: i32, new: i32) {
    let pos = heap
        .iter()
        .position(|&v| v == old)
        .unwrap_or_else(|| panic!("{} is not in the heap", old));
    heap.insert(pos, new);
}

fn main() -> Result<(), HeapError> {
    println!("Before heapification:\n{}", join(INIT));

    let mut heap = MaxHeap::from(INIT);
    println!("After heapification:\n{}", join(&heap));
    assert_eq!(heap.as_slice(), &HEAPIFIED);

    println!("Extracting:");
    extract(&mut heap, &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0])?;
    println!();

    let mut heap = MaxHeap::from(INIT);
    heap.push(10);
    println!("Added '10':");
    extract(&mut heap, &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0])?;
    println!();

    let mut heap = MaxHeap::from(INIT);
    replace(&mut heap, 5, 10);
    println!("Changed '5' to '10':");
    extract(&mut heap, &[10, 9, 8, 7, 6, 4, 3, 2, 1, 0])?;
    println!();

    let mut heap = MaxHeap::from(INIT);
    replace(&mut heap, 5, -1);
    println!("Changed '5' to '-1':");
    extract(&mut heap, &[9, 8, 7, 6, 4, 3, 2, 1, 0, -1])?;
    println!();

    let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    println!("Heap sort input:\n{}", join(data));
    heap_sort_ascending(&mut data);
    println!("Heap sort output:\n{}", join(data));
    assert_eq!(data, INIT);

    Ok(())
}
