//! An unbalanced BST of [`Record`]s keyed by their id. Nodes own their children through
//! `Box`es and keep no parent pointers, so a node's parent is recovered by walking down from
//! the root and comparing keys.
//!
//! # Examples
//!
//! ```
//! use record_bst::ordered_table::OrderedTable;
//! use record_bst::record::Bid;
//!
//! let mut table = OrderedTable::new();
//!
//! // Nothing in here yet.
//! assert!(table.search("50").is_none());
//!
//! for id in ["50", "30", "70", "20", "40"] {
//!     table.insert(Bid::new(id, "Chair", "General Fund", 10.0));
//! }
//!
//! let ids: Vec<_> = table.in_order().map(|bid| bid.id.as_str()).collect();
//! assert_eq!(ids, ["20", "30", "40", "50", "70"]);
//!
//! // Parents are found by walking down from the root.
//! let forty = table.search("40").unwrap();
//! assert_eq!(table.get_parent(forty).map(|n| n.id()), Some("30"));
//!
//! // "30" has two children so its in-order successor takes its place.
//! let removed = table.remove("30");
//! assert_eq!(removed.map(|bid| bid.id), Some("30".to_string()));
//!
//! let ids: Vec<_> = table.in_order().map(|bid| bid.id.as_str()).collect();
//! assert_eq!(ids, ["20", "40", "50", "70"]);
//! assert_eq!(table.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ptr;

use log::trace;

use crate::record::Record;

type Link<R> = Option<Box<Node<R>>>;

/// A Binary Search Tree of records ordered by [`Record::id`]. Keys in a node's left subtree are
/// strictly smaller than its own and keys in its right subtree are greater or equal, so
/// duplicate ids are kept as separate nodes to the right of the first one inserted.
///
/// The tree is never rebalanced. Inserting ids in sorted order builds a chain.
pub struct OrderedTable<R> {
    root: Link<R>,
}

/// A node in an [`OrderedTable`]. Handles to nodes are only ever handed out as shared borrows of
/// the table so they can't outlive the next `insert` or `remove`.
pub struct Node<R> {
    record: R,
    left: Link<R>,
    right: Link<R>,
}

impl<R> Node<R> {
    fn new(record: R) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    /// The record stored in this node.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// The key of this node.
    pub fn id(&self) -> &str
    where
        R: Record,
    {
        self.record.id()
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<R> fmt::Debug for Node<R>
where
    R: Record + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("record", &self.record)
            .field("left", &self.left().map(Node::id))
            .field("right", &self.right().map(Node::id))
            .finish()
    }
}

impl<R> Default for OrderedTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Drop for OrderedTable<R> {
    // Unlink every node before it is dropped so a long chain doesn't recurse through `Box::drop`.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<R>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Clones by re-inserting the records in pre-order, which rebuilds the exact same shape.
impl<R> Clone for OrderedTable<R>
where
    R: Record + Clone,
{
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<R> fmt::Debug for OrderedTable<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<R> OrderedTable<R> {
    /// Generates a new, empty `OrderedTable`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` if the table is empty.
    pub fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }

    /// Returns `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the records in the table. This walks the whole tree on every call.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Inserts the record. Ids equal to an existing id are not rejected; the new record gets its
    /// own node in the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_bst::ordered_table::OrderedTable;
    /// use record_bst::record::Course;
    ///
    /// let mut table = OrderedTable::new();
    /// table.insert(Course::new("CSCI100", "Introduction to Computer Science"));
    /// table.insert(Course::new("CSCI100", "Introduction to Computer Science"));
    ///
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn insert(&mut self, record: R)
    where
        R: Record,
    {
        trace!("inserting {}", record.id());

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.id() > record.id() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(record)));
    }

    /// Finds the first node with the given id on the path down from the root.
    pub fn search(&self, id: &str) -> Option<&Node<R>>
    where
        R: Record,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match id.cmp(node.id()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Potentially finds the record with the given id.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_bst::ordered_table::OrderedTable;
    /// use record_bst::record::Bid;
    ///
    /// let mut table = OrderedTable::new();
    /// table.insert(Bid::new("98109", "Table", "General Fund", 3.0));
    ///
    /// assert_eq!(table.find("98109").map(|bid| bid.amount), Some(3.0));
    /// assert_eq!(table.find("42"), None);
    /// ```
    pub fn find(&self, id: &str) -> Option<&R>
    where
        R: Record,
    {
        self.search(id).map(Node::record)
    }

    /// Returns `true` if some record has the given id.
    pub fn contains(&self, id: &str) -> bool
    where
        R: Record,
    {
        self.search(id).is_some()
    }

    /// Finds the parent of `target`, or `None` if `target` is the root.
    ///
    /// Nodes don't store parent pointers. This walks down from the root using the same
    /// comparisons as [`insert`][Self::insert] until it reaches a node whose left or right child
    /// *is* `target`. A node from another table therefore yields `None`.
    pub fn get_parent(&self, target: &Node<R>) -> Option<&Node<R>>
    where
        R: Record,
    {
        let is_target = |child: Option<&Node<R>>| child.map_or(false, |c| ptr::eq(c, target));

        let mut current = self.root();
        while let Some(node) = current {
            if is_target(node.left()) || is_target(node.right()) {
                return Some(node);
            }
            current = if target.id() < node.id() {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }

    /// Removes the first node found with the given id and returns its record. If no node has the
    /// id, nothing happens and `None` is returned.
    ///
    /// A node with two children stays in place. Its record is swapped for its in-order
    /// successor's, and the successor node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_bst::ordered_table::OrderedTable;
    /// use record_bst::record::Course;
    ///
    /// let mut table = OrderedTable::new();
    /// table.insert(Course::new("MATH201", "Discrete Mathematics"));
    ///
    /// assert_eq!(table.remove("MATH201").map(|c| c.id), Some("MATH201".to_string()));
    /// assert_eq!(table.remove("MATH201"), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, id: &str) -> Option<R>
    where
        R: Record,
    {
        let removed = Self::remove_from(&mut self.root, id);
        trace!("removing {} -> found: {}", id, removed.is_some());
        removed
    }

    /// Descends to the link holding `id`. That link is either the root or a child link of the
    /// node [`get_parent`][Self::get_parent] would return.
    fn remove_from(slot: &mut Link<R>, id: &str) -> Option<R>
    where
        R: Record,
    {
        let node = slot.as_mut()?;
        match id.cmp(node.id()) {
            Ordering::Less => Self::remove_from(&mut node.left, id),
            Ordering::Greater => Self::remove_from(&mut node.right, id),
            Ordering::Equal => Self::remove_node(slot),
        }
    }

    /// Removes the node held by `slot`.
    fn remove_node(slot: &mut Link<R>) -> Option<R> {
        let node = slot.as_mut()?;

        if node.left.is_some() {
            // Only succeeds when there is a right child too.
            if let Some(successor) = Self::remove_leftmost(&mut node.right) {
                return Some(mem::replace(&mut node.record, successor));
            }
        }

        // At most one child: it takes this node's place (on the root or its parent).
        let mut node = slot.take()?;
        *slot = node.left.take().or_else(|| node.right.take());
        Some(node.record)
    }

    /// Removes the smallest node under `slot`. It has no left child so it can always be unlinked.
    fn remove_leftmost(slot: &mut Link<R>) -> Option<R> {
        let node = slot.as_mut()?;
        if node.left.is_some() {
            Self::remove_leftmost(&mut node.left)
        } else {
            Self::remove_node(slot)
        }
    }

    /// Visits the records in ascending id order.
    pub fn in_order(&self) -> InOrder<'_, R> {
        InOrder::new(self.root())
    }

    /// Visits each node's record before those of its left then right subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, R> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Visits each node's record after those of its left then right subtrees.
    pub fn post_order(&self) -> PostOrder<'_, R> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<R: Record> Extend<R> for OrderedTable<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<R: Record> FromIterator<R> for OrderedTable<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, R> IntoIterator for &'a OrderedTable<R> {
    type Item = &'a R;
    type IntoIter = InOrder<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator returned by [`OrderedTable::in_order`].
pub struct InOrder<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> InOrder<'a, R> {
    fn new(root: Option<&'a Node<R>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut node: Option<&'a Node<R>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, R> Iterator for InOrder<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());
        Some(&node.record)
    }
}

impl<R> FusedIterator for InOrder<'_, R> {}

/// Pre-order iterator returned by [`OrderedTable::pre_order`].
pub struct PreOrder<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iterator for PreOrder<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.record)
    }
}

impl<R> FusedIterator for PreOrder<'_, R> {}

/// Post-order iterator returned by [`OrderedTable::post_order`].
pub struct PostOrder<'a, R> {
    /// Nodes still to visit, flagged once their children have been pushed.
    stack: Vec<(&'a Node<R>, bool)>,
}

impl<'a, R> Iterator for PostOrder<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.record);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

impl<R> FusedIterator for PostOrder<'_, R> {}
