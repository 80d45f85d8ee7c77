//! An unbalanced Binary Search Tree. Nodes own their children directly (`Box`) so the tree is a
//! strict ownership hierarchy. The shape of the tree depends only on the order values are
//! inserted and deleted in.
//!
//! # Examples
//!
//! ```
//! use classic_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//! assert_eq!(tree.height(), Err(TreeError::EmptyTree));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{TreeError, TreeResult};
use crate::node::{Link, Node};

/// A Binary Search Tree holding distinct values of `T`. This can be used for inserting,
/// searching, and deleting values as well as walking them in any of the four classic orders.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Degenerate trees can be as deep as they are long so the default recursive drop could blow
    // the stack. Detach every node before it is dropped instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({} nodes)", self.len)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The root node, if any. Useful for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there is no root to measure from.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3, 4]);
    /// assert_eq!(tree.height(), Ok(2));
    /// ```
    pub fn height(&self) -> TreeResult<usize> {
        self.root().map(Node::height).ok_or(TreeError::EmptyTree)
    }

    /// Potentially finds the stored value equal to `item`. If no node holds it, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    ///
    /// assert_eq!(tree.search(&3), Some(&3));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match item.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Returns `true` if some node holds a value equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.search(item).is_some()
    }

    /// Finds the parent of the node holding `item` or, if `item` isn't in the tree, the node a
    /// new node holding `item` would be attached to. Returns `None` if the tree is empty or
    /// `item` is at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([4, 2, 6]);
    ///
    /// assert_eq!(tree.parent(&4), None);
    /// assert_eq!(tree.parent(&2), Some(&4));
    /// // 5 would be attached as the left child of 6.
    /// assert_eq!(tree.parent(&5), Some(&6));
    /// ```
    pub fn parent(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut node = self.root();
        while let Some(n) = node {
            node = match item.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => break,
                Ordering::Greater => n.right(),
            };
            parent = Some(&n.value);
        }
        parent
    }

    /// Inserts `item` as a new leaf. Returns `false`, leaving the tree untouched, if an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let slot = locate(&mut self.root, &item);
        if slot.is_some() {
            trace!(len = self.len, "dropped duplicate value");
            return false;
        }

        *slot = Some(Box::new(Node::new(item)));
        self.len += 1;
        trace!(len = self.len, "inserted value");
        true
    }

    /// Deletes the node holding a value equal to `item` and returns the stored value.
    ///
    /// A node with two children is replaced by its in-order predecessor (the largest value in
    /// its left subtree).
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `item` (which includes the tree being empty).
    /// The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let mut tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    ///
    /// assert_eq!(tree.delete(&4), Ok(4));
    /// assert_eq!(tree.items_level_order(), [&3, &2, &6, &1, &5, &7]);
    /// ```
    pub fn delete(&mut self, item: &T) -> TreeResult<T>
    where
        T: Ord,
    {
        let slot = locate(&mut self.root, item);
        let Some(node) = slot.take() else {
            debug!(len = self.len, "value to delete not found");
            return Err(TreeError::NotFound);
        };

        let (value, replacement) = node.unlink();
        *slot = replacement;
        self.len -= 1;
        debug!(len = self.len, "deleted value");
        Ok(value)
    }
}

/// Descends from `link` towards `item`, returning the slot holding `item` or, if it isn't
/// present, the empty slot where it belongs.
fn locate<'a, T>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = link.as_deref().map(|n| item.cmp(&n.value));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting each item in order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
