//! Textbook Data Structures for Rust
//!
//! This crate provides small, strongly-typed implementations of three classic
//! introductory data structures:
//!
//! - **Unordered List**: a singly-linked list built from owned nodes; O(1) insertion at
//!   the head, O(n) search, indexing, and positional insert/remove
//! - **Binary Heap**: an array-backed min-heap; O(log n) insert and delete-min,
//!   O(1) find-min, O(n) construction from an unordered vector
//! - **Expression Converter**: a shunting-yard infix-to-postfix converter over the four
//!   arithmetic operators, plus a postfix evaluator
//!
//! Every precondition is checked: operations that cannot succeed return a typed
//! error ([`HeapError`], [`ListError`], [`ExpressionError`]) and leave the structure
//! unchanged.
//!
//! # Example
//!
//! ```rust
//! use textbook_structures::binary_heap::BinaryHeap;
//! use textbook_structures::expression::infix_to_postfix;
//! use textbook_structures::unordered_list::UnorderedList;
//!
//! let mut heap = BinaryHeap::from_vec(vec![9, 5, 6, 2, 3]);
//! assert_eq!(heap.del_min(), Ok(2));
//!
//! let mut list = UnorderedList::new();
//! list.add("b");
//! list.add("a");
//! assert_eq!(list.index(&"b"), Some(1));
//!
//! assert_eq!(infix_to_postfix("A+B*C").unwrap(), "ABC*+");
//! ```

pub mod binary_heap;
pub mod expression;
pub mod traits;
pub mod unordered_list;

// Re-export the main types for convenience
pub use binary_heap::BinaryHeap;
pub use expression::{infix_to_postfix, ExpressionError};
pub use traits::{Heap, HeapError};
pub use unordered_list::{ListError, UnorderedList};
