#![cfg(feature = "serde")]

use sift_heap::{Heap, MaxHeap, MinHeap};

// CBOR array of 10 unsigned ints: 0x8a followed by 0x00..=0x09
const UNORDERED: &[u8] = b"\x8a\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09";

#[test]
fn test_serializes_tree_order() {
    let heap = MaxHeap::from_vec((0u8..10).collect());
    let bytes = serde_cbor::to_vec(&heap).unwrap();
    assert_eq!(bytes, b"\x8a\x09\x08\x05\x06\x07\x01\x04\x00\x03\x02");
}

#[test]
fn test_deserialize_heapifies() {
    let heap: MaxHeap<u8> = serde_cbor::from_slice(UNORDERED).unwrap();
    assert!(heap.is_valid());
    assert_eq!(heap.as_slice(), &[9, 8, 5, 6, 7, 1, 4, 0, 3, 2]);

    let mut heap: MinHeap<u8> = serde_cbor::from_slice(UNORDERED).unwrap();
    assert_eq!(heap.pop_value(), Ok(0));
    assert_eq!(heap.pop_value(), Ok(1));
}

#[test]
fn test_deserialize_rejects_non_sequence() {
    // CBOR unsigned int 7
    let result: Result<MaxHeap<u8>, _> = serde_cbor::from_slice(b"\x07");
    assert!(result.is_err());
}
