//! This crate holds small, classic in-memory data structures for records read from delimited
//! text, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! [`OrderedTable`][ordered_table::OrderedTable] is a Binary Search Tree, a data structure
//! supporting operations to insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here every `Node` stores one record and owns up
//! to two child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an id less than its own id.
//! 2. For every `Node`, all the `Node`s in its right subtree have an id greater than or equal
//!    to its own id. Duplicate ids are allowed and end up to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree never rebalances itself, so its height depends entirely on insertion
//! order. Inserting already sorted ids gives a tree that is really a linked list. An in-order
//! walk (left subtree, then the subtree root, then the right subtree) visits the records sorted
//! by id.
//!
//! ## Sorting
//!
//! The [`sort`] module reorders a slice of records by title, with a selection sort and a
//! quicksort that treat equal titles differently.
//!
//! ## Loading
//!
//! The [`load`] module reads bids from CSV and courses from comma separated lines, and
//! [`planner`] wraps a table of courses for lookups.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod load;
pub mod ordered_table;
pub mod planner;
pub mod record;
pub mod sort;

pub use error::{Error, Result};
pub use ordered_table::OrderedTable;
pub use record::{Bid, Course, Record};
