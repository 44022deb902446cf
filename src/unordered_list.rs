//! Singly-linked unordered list
//!
//! The list owns a chain of [`Node`]s through a single `head` link. Every
//! node exclusively owns the rest of the chain, so cycles cannot be built
//! and unlinking a node simply moves it out of its slot.
//!
//! Positions are 0-based and follow the chain from the head. All positional
//! and keyed operations walk the chain, so they are O(n); only [`add`] and
//! [`pop_front`] are O(1).
//!
//! Failed operations return a [`ListError`] and leave the list untouched.
//!
//! # Example
//!
//! ```rust
//! use textbook_structures::unordered_list::{ListError, UnorderedList};
//!
//! let mut list = UnorderedList::new();
//! list.add(31);
//! list.add(77);
//! list.append(93);
//!
//! assert_eq!(list.length(), 3);
//! assert_eq!(list.index(&31), Some(1));
//! assert_eq!(list.pop(2), Ok(93));
//! assert_eq!(list.pop(5), Err(ListError::IndexOutOfRange { index: 5, len: 2 }));
//! ```
//!
//! [`add`]: UnorderedList::add
//! [`pop_front`]: UnorderedList::pop_front

use std::fmt;
use std::mem;

use thiserror::Error;

/// Error type for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A removal was attempted on a list with no elements
    #[error("list is empty")]
    Empty,
    /// A positional operation was given a position past the end of the list
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A keyed removal did not find the item
    #[error("item not found in list")]
    NotFound,
}

type Link<T> = Option<Box<Node<T>>>;

/// A single link in the chain: one payload plus the rest of the list
pub struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    // Only reports whether a successor exists; a derived impl would recurse
    // down the whole chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl<T> Node<T> {
    /// Creates an unlinked node
    pub fn new(data: T) -> Self {
        Node { data, next: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the payload, returning the old one
    pub fn set_data(&mut self, data: T) -> T {
        mem::replace(&mut self.data, data)
    }

    /// The following node, if any
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// A singly-linked list with no ordering among its items
pub struct UnorderedList<T> {
    head: Link<T>,
}

impl<T> UnorderedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        UnorderedList { head: None }
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `item` at the head of the list
    pub fn add(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data: item, next }));
    }

    /// Inserts `item` after the last node
    pub fn append(&mut self, item: T) {
        *self.tail_slot() = Some(Box::new(Node::new(item)));
    }

    /// Counts the nodes by walking the whole chain
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Alias for [`length`](Self::length)
    pub fn len(&self) -> usize {
        self.length()
    }

    /// Removes and returns the payload at position `index`
    ///
    /// # Errors
    /// [`ListError::Empty`] on an empty list, [`ListError::IndexOutOfRange`]
    /// when `index >= length()`.
    pub fn pop(&mut self, index: usize) -> Result<T, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }

        let slot = self
            .slot_mut(index)
            .map_err(|len| ListError::IndexOutOfRange { index, len })?;
        match slot.take() {
            Some(node) => {
                let Node { data, next } = *node;
                *slot = next;
                Ok(data)
            }
            // The walk ended exactly on the terminal link
            None => Err(ListError::IndexOutOfRange { index, len: index }),
        }
    }

    /// Removes and returns the first payload; same as `pop(0)`
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.pop(0)
    }

    /// Returns the first payload without removing it
    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::data)
    }

    /// Splices `item` in so that it ends up at position `index`
    ///
    /// `index == 0` behaves as [`add`](Self::add). Any `index >= length()`
    /// links the node after the last one, like [`append`](Self::append).
    /// Never fails; the `Result` matches the other positional operations.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let slot = self.slot_or_tail(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { data: item, next }));
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Overwrites the payload at `index`, returning the previous one
    ///
    /// # Errors
    /// [`ListError::IndexOutOfRange`] when `index >= length()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, item)),
            None => Err(ListError::IndexOutOfRange {
                index,
                len: self.length(),
            }),
        }
    }

    /// Drops every node
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// The first node of the chain
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Walks `index` links from the head and returns the slot that holds
    /// position `index` (the terminal `None` slot when `index == length()`).
    /// Runs out early with the list length when `index > length()`.
    fn slot_mut(&mut self, index: usize) -> Result<&mut Link<T>, usize> {
        let mut cursor = &mut self.head;
        for walked in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(walked),
            }
        }
        Ok(cursor)
    }

    /// Like [`slot_mut`](Self::slot_mut), but stops at the terminal slot
    /// when the chain runs out first
    fn slot_or_tail(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// The terminal `None` slot after the last node
    fn tail_slot(&mut self) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }
}

impl<T: PartialEq> UnorderedList<T> {
    /// Returns true if some payload equals `item`
    pub fn search(&self, item: &T) -> bool {
        self.iter().any(|data| data == item)
    }

    /// Position of the first payload equal to `item`
    pub fn index(&self, item: &T) -> Option<usize> {
        self.iter().position(|data| data == item)
    }

    /// Unlinks the first node whose payload equals `item` and returns it
    ///
    /// # Errors
    /// [`ListError::NotFound`] if no payload matches; the list is unchanged.
    pub fn remove(&mut self, item: &T) -> Result<T, ListError> {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return Err(ListError::NotFound),
                Some(node) if node.data == *item => {
                    let next = node.next.take();
                    let removed = mem::replace(cursor, next);
                    return removed.map(|node| node.data).ok_or(ListError::NotFound);
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }
}

impl<T> Drop for UnorderedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains
        self.clear();
    }
}

impl<T> Default for UnorderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UnorderedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for UnorderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnorderedList<T> {}

impl<T: fmt::Debug> fmt::Debug for UnorderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for UnorderedList<T> {
    /// Builds a list whose traversal order matches the iterator's order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = UnorderedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for UnorderedList<T> {
    /// Appends every item, walking to the tail only once
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_slot();
        for item in iter {
            let node = tail.insert(Box::new(Node::new(item)));
            tail = &mut node.next;
        }
    }
}

/// Borrowing iterator over the payloads, head first
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

/// Mutable iterator over the payloads, head first
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

/// Owning iterator that pops payloads off the head
pub struct IntoIter<T>(UnorderedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for UnorderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a UnorderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut UnorderedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(list: &UnorderedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_empty_list() {
        let mut list: UnorderedList<i32> = UnorderedList::new();
        assert!(list.is_empty());
        assert_eq!(list.length(), 0);
        assert!(!list.search(&1));
        assert_eq!(list.index(&1), None);
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert_eq!(list.pop(3), Err(ListError::Empty));
        assert_eq!(list.remove(&1), Err(ListError::NotFound));
        assert_eq!(list.peek_front(), None);
    }

    #[test]
    fn test_add_is_most_recent_first() {
        let mut list = UnorderedList::new();
        list.add(31);
        list.add(77);
        list.add(17);
        assert_eq!(contents(&list), vec![17, 77, 31]);
        assert_eq!(list.peek_front(), Some(&17));
    }

    #[test]
    fn test_append_on_empty_behaves_as_add() {
        let mut list = UnorderedList::new();
        list.append(1);
        list.append(2);
        list.add(0);
        assert_eq!(contents(&list), vec![0, 1, 2]);
    }

    #[test]
    fn test_walkthrough() {
        let mut list = UnorderedList::new();
        assert!(list.is_empty());

        list.append(9);
        list.add(10);
        list.add(11);
        list.add(12);
        list.add(13);
        list.append(14);
        assert_eq!(list.length(), 6);

        assert_eq!(list.index(&10), Some(3));
        assert_eq!(list.index(&11), Some(2));
        assert_eq!(list.index(&12), Some(1));
        assert_eq!(list.index(&13), Some(0));
        assert_eq!(list.index(&14), Some(5));

        assert_eq!(list.pop(0), Ok(13));
        assert_eq!(list.pop_front(), Ok(12));
        assert_eq!(list.pop(1), Ok(10));
        assert!(!list.search(&10));
        assert!(!list.search(&1));

        assert_eq!(list.remove(&10), Err(ListError::NotFound));
        assert_eq!(list.length(), 3);
        assert_eq!(list.remove(&2), Err(ListError::NotFound));

        assert_eq!(list.insert(0, 15), Ok(()));
        assert!(list.search(&15));
        assert_eq!(list.insert(1, 20), Ok(()));
        assert!(list.search(&20));
        assert_eq!(list.length(), 5);
        assert_eq!(contents(&list), vec![15, 20, 11, 9, 14]);

        assert_eq!(list.pop(1), Ok(20));
        assert_eq!(list.pop(0), Ok(15));
        assert_eq!(contents(&list), vec![11, 9, 14]);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list: UnorderedList<i32> = (1..=5).collect();
        assert_eq!(list.remove(&1), Ok(1));
        assert_eq!(list.remove(&3), Ok(3));
        assert_eq!(list.remove(&5), Ok(5));
        assert_eq!(contents(&list), vec![2, 4]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut list: UnorderedList<char> = "abcb".chars().collect();
        assert_eq!(list.remove(&'b'), Ok('b'));
        assert_eq!(contents(&list), vec!['a', 'c', 'b']);
    }

    #[test]
    fn test_pop_out_of_range_leaves_list_intact() {
        let mut list: UnorderedList<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(
            list.pop(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.pop(10),
            Err(ListError::IndexOutOfRange { index: 10, len: 3 })
        );
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.pop(2), Ok(3));
    }

    #[test]
    fn test_insert_positions() {
        let mut list = UnorderedList::new();
        assert_eq!(list.insert(0, 'b'), Ok(()));
        assert_eq!(list.insert(0, 'a'), Ok(()));
        assert_eq!(list.insert(2, 'd'), Ok(()));
        assert_eq!(list.insert(2, 'c'), Ok(()));
        assert_eq!(contents(&list), vec!['a', 'b', 'c', 'd']);

        // Past the end links after the last node
        assert_eq!(list.insert(4, 'e'), Ok(()));
        assert_eq!(list.insert(9, 'f'), Ok(()));
        assert_eq!(contents(&list), vec!['a', 'b', 'c', 'd', 'e', 'f']);

        let mut empty = UnorderedList::new();
        assert_eq!(empty.insert(3, 1), Ok(()));
        assert_eq!(contents(&empty), vec![1]);
    }

    #[test]
    fn test_positional_mutation() {
        let mut list: UnorderedList<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.set(1, 20), Ok(2));
        assert_eq!(
            list.set(3, 40),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        if let Some(first) = list.get_mut(0) {
            *first *= 10;
        }
        for item in &mut list {
            *item += 1;
        }
        assert_eq!(list.get(0), Some(&11));
        assert_eq!(list.get(1), Some(&21));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_node_accessors() {
        let mut list = UnorderedList::new();
        list.add("tail");
        list.add("head");

        let head = list.head().expect("list has a head");
        assert_eq!(*head.data(), "head");
        let next = head.next().expect("head has a successor");
        assert_eq!(*next.data(), "tail");
        assert!(next.next().is_none());

        let mut node = Node::new(5);
        assert_eq!(node.set_data(6), 5);
        *node.data_mut() += 1;
        assert_eq!(node.into_data(), 7);
    }

    #[test]
    fn test_clone_eq_debug() {
        let list: UnorderedList<i32> = vec![3, 1, 2].into_iter().collect();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{:?}", copy), "[3, 1, 2]");

        let owned: Vec<i32> = copy.into_iter().collect();
        assert_eq!(owned, vec![3, 1, 2]);
    }

    #[test]
    fn test_extend_appends() {
        let mut list: UnorderedList<i32> = vec![1].into_iter().collect();
        list.extend(vec![2, 3]);
        list.extend(Vec::new());
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_node_debug_is_shallow() {
        let list: UnorderedList<i32> = (0..200_000).collect();
        let head = list.head().expect("list has a head");
        assert_eq!(format!("{:?}", head), "Node { data: 0, has_next: true }");

        let node = Node::new('x');
        assert_eq!(format!("{:?}", node), "Node { data: 'x', has_next: false }");
    }

    #[test]
    fn test_long_chain_drops() {
        let mut list = UnorderedList::new();
        for i in 0..200_000 {
            list.add(i);
        }
        assert_eq!(list.length(), 200_000);
        drop(list);
    }
}
