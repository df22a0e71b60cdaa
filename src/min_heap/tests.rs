use crate::error::HuffmanError;

use super::MinHeap;

#[test]
fn test_extracts_in_ascending_order() {
    let mut heap = MinHeap::new();

    for x in [42, 7, 19, 3, 25, 11, 3] {
        heap.insert(x);
    }

    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min().unwrap());
    }

    assert_eq!(extracted, vec![3, 3, 7, 11, 19, 25, 42]);
}

#[test]
fn test_extract_min_on_empty_heap() {
    let mut heap: MinHeap<usize> = MinHeap::new();

    assert!(matches!(heap.extract_min(), Err(HuffmanError::EmptyQueue)));
}

#[test]
fn test_peek_does_not_remove() {
    let mut heap = MinHeap::new();
    heap.insert(10);
    heap.insert(5);

    assert_eq!(heap.peek(), Some(&5));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_min().unwrap(), 5);
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_peek_on_empty_heap() {
    let heap: MinHeap<usize> = MinHeap::new();

    assert!(heap.peek().is_none());
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_interleaved_insert_and_extract() {
    let mut heap = MinHeap::new();

    heap.insert(8);
    heap.insert(1);
    assert_eq!(heap.extract_min().unwrap(), 1);

    heap.insert(4);
    heap.insert(2);
    assert_eq!(heap.extract_min().unwrap(), 2);
    assert_eq!(heap.extract_min().unwrap(), 4);
    assert_eq!(heap.extract_min().unwrap(), 8);

    assert!(heap.is_empty());
}

#[test]
fn test_duplicate_weights_all_come_out() {
    let mut heap = MinHeap::new();
    for _ in 0..10 {
        heap.insert(1);
    }

    for _ in 0..10 {
        assert_eq!(heap.extract_min().unwrap(), 1);
    }
    assert!(heap.is_empty());
}
