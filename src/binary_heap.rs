//! Binary min-heap priority queue
//!
//! An array-backed complete binary tree holding the min-heap invariant: every
//! key is greater than or equal to the key of its parent, so the minimum sits
//! at the root.
//!
//! Positions are counted from 1 (root = 1, parent of `p` = `p / 2`, children
//! of `p` = `2p` and `2p + 1`). The backing vector stores position `p` at
//! offset `p - 1`, which keeps the textbook arithmetic without needing a
//! sentinel key in slot 0.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `del_min`    | O(log n)   |
//! | `find_min`   | O(1)       |
//! | `build_heap` | O(n)       |
//! | `merge`      | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use textbook_structures::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! for k in [5, 9, 1, 7, 3] {
//!     heap.insert(k);
//! }
//!
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert_eq!(heap.del_min(), Ok(1));
//! assert_eq!(heap.del_min(), Ok(3));
//! assert_eq!(heap.size(), 3);
//! ```

use std::slice;
use std::vec;

use crate::traits::{Heap, HeapError};

/// A binary min-heap of keys ordered by their natural ordering
///
/// Duplicate keys are allowed. Among equal keys no extraction order is
/// guaranteed.
#[derive(Debug, Clone)]
pub struct BinaryHeap<K> {
    /// Level-order storage; position `p` lives at `data[p - 1]`
    data: Vec<K>,
}

impl<K: Ord> BinaryHeap<K> {
    /// Creates a new, empty binary heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from an unordered vector of keys in O(n)
    pub fn from_vec(items: Vec<K>) -> Self {
        let mut heap = Self::new();
        heap.build_heap(items);
        heap
    }

    /// Adds a new key to the heap
    ///
    /// The key is appended at the next free leaf, which keeps the tree
    /// complete, and then bubbled up until its parent is no larger.
    pub fn insert(&mut self, key: K) {
        self.data.push(key);
        self.bubble_up(self.data.len());
    }

    /// Returns the minimum key, leaving it in the heap
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn find_min(&self) -> Result<&K, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum key
    ///
    /// The last leaf replaces the root, the heap shrinks by one, and the new
    /// root is bubbled down toward the leaves.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn del_min(&mut self) -> Result<K, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.bubble_down(1);
        }

        Ok(min)
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of keys in the heap
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of keys the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Replaces the heap contents with `items`, restoring heap order bottom-up
    ///
    /// Every non-leaf position, from the last one (`size / 2`) back to the
    /// root, is bubbled down. Most positions sit near the leaves and move at
    /// most a level or two, so the whole pass is O(n).
    pub fn build_heap(&mut self, items: Vec<K>) {
        self.data = items;
        self.heapify();
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the keys in level order, root first
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Iterates over the keys in level order (not sorted order)
    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.data.iter()
    }

    /// Consumes the heap, returning the keys in level order
    pub fn into_vec(self) -> Vec<K> {
        self.data
    }

    /// Consumes the heap, returning the keys in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(key) = self.del_min() {
            sorted.push(key);
        }
        sorted
    }

    fn heapify(&mut self) {
        for pos in (1..=self.data.len() / 2).rev() {
            self.bubble_down(pos);
        }
    }

    /// Move the key at 1-based `pos` up while its parent is strictly greater
    fn bubble_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.data[parent - 1] > self.data[pos - 1] {
                self.data.swap(parent - 1, pos - 1);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Move the key at 1-based `pos` down while a child is strictly smaller
    fn bubble_down(&mut self, mut pos: usize) {
        let size = self.data.len();
        while 2 * pos <= size {
            let child = self.min_child(pos);
            if self.data[child - 1] < self.data[pos - 1] {
                self.data.swap(child - 1, pos - 1);
                pos = child;
            } else {
                break;
            }
        }
    }

    /// Position of the smaller child of `pos`; the left child wins ties.
    /// `pos` must have at least a left child.
    fn min_child(&self, pos: usize) -> usize {
        let left = 2 * pos;
        let right = left + 1;
        if right > self.data.len() || self.data[left - 1] <= self.data[right - 1] {
            left
        } else {
            right
        }
    }
}

impl<K: Ord> Heap<K> for BinaryHeap<K> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K) {
        self.insert(key);
    }

    fn peek(&self) -> Option<&K> {
        self.find_min().ok()
    }

    fn pop(&mut self) -> Option<K> {
        self.del_min().ok()
    }

    fn merge(&mut self, other: Self) {
        // Appending keeps the tree complete; one bottom-up pass restores order
        self.data.extend(other.data);
        self.heapify();
    }
}

impl<K: Ord> Default for BinaryHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> From<Vec<K>> for BinaryHeap<K> {
    fn from(items: Vec<K>) -> Self {
        Self::from_vec(items)
    }
}

impl<K: Ord> FromIterator<K> for BinaryHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<K: Ord> Extend<K> for BinaryHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for BinaryHeap<K> {
    type Item = K;
    type IntoIter = vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a BinaryHeap<K> {
    type Item = &'a K;
    type IntoIter = slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
