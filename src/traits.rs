//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait, a small min-heap interface in the
//! shape of Rust's standard heap API:
//!
//! - `push` inserts a key
//! - `pop` removes and returns the minimum
//! - `peek` returns the minimum without removing it
//!
//! The trait is deliberately `Option`-based so generic code can drain any
//! implementation with `while let Some(k) = heap.pop()`. Concrete types may
//! offer stricter, `Result`-returning operations on top of it; see
//! [`BinaryHeap::find_min`](crate::binary_heap::BinaryHeap::find_min).

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A query or removal was attempted on a heap with no elements
    #[error("heap is empty")]
    Empty,
}

/// Base trait for min-heap / priority queue data structures
///
/// Unlike `std::collections::BinaryHeap`, which is a max-heap, implementors
/// of this trait always surface the *smallest* key first. Keys are compared
/// by their natural [`Ord`] ordering.
///
/// # Example
///
/// ```rust
/// use textbook_structures::Heap;
/// use textbook_structures::binary_heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<K>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
