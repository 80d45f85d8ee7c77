//! This crate exposes a classic, unbalanced Binary Search Tree (BST) along with the four
//! classic ways of walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//! > `Node`s with at least one child are "branch nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of edges on the longest path from the root `Node` to a leaf `Node`).
//! This tree never rebalances so its height depends entirely on insertion
//! order: inserting sorted values produces a tree as tall as it is long.
//!
//! Equal values are never stored twice. Inserting a value that is already
//! present leaves the tree untouched.
//!
//! ## Traversals
//!
//! - in-order: left subtree, node, right subtree (ascending order).
//! - pre-order: node, left subtree, right subtree.
//! - post-order: left subtree, right subtree, node.
//! - level-order: breadth first, each level left to right.
//!
//! The methods on [`Tree`] walk iteratively using a [`Deque`] for pending
//! nodes. The [`recursive`] module has the textbook recursive versions.
//!
//! # Examples
//!
//! ```
//! use classic_bst::Tree;
//!
//! let mut tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
//!
//! assert_eq!(tree.items_in_order(), [&1, &2, &3, &4, &5, &6, &7]);
//! assert_eq!(tree.items_level_order(), [&4, &2, &6, &1, &3, &5, &7]);
//!
//! tree.delete(&7).unwrap();
//! assert_eq!(tree.to_string(), "Tree(6 nodes)");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod deque;
pub mod error;
mod node;
pub mod recursive;
mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use deque::Deque;
pub use error::{TreeError, TreeResult};
pub use node::Node;
pub use traversal::Iter;
pub use tree::Tree;
