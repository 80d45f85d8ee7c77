//! Recursive versions of the four traversals. These read like the textbook definitions and must
//! always agree with the iterative methods on [`Tree`], but they recurse once per level so a
//! degenerate tree can exhaust the stack. Prefer the methods on [`Tree`].
//!
//! # Examples
//!
//! ```
//! use classic_bst::{recursive, Tree};
//!
//! let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
//!
//! assert_eq!(recursive::pre_order(&tree), tree.items_pre_order());
//! assert_eq!(recursive::level_order(&tree), [&4, &2, &6, &1, &3, &5, &7]);
//! ```

use crate::node::Node;
use crate::tree::Tree;

/// Values in ascending order.
pub fn in_order<T>(tree: &Tree<T>) -> Vec<&T> {
    fn visit<'a, T>(node: &'a Node<T>, items: &mut Vec<&'a T>) {
        if let Some(left) = node.left() {
            visit(left, items);
        }
        items.push(node.value());
        if let Some(right) = node.right() {
            visit(right, items);
        }
    }

    let mut items = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        visit(root, &mut items);
    }
    items
}

/// Values with each node before its subtrees.
pub fn pre_order<T>(tree: &Tree<T>) -> Vec<&T> {
    fn visit<'a, T>(node: &'a Node<T>, items: &mut Vec<&'a T>) {
        items.push(node.value());
        if let Some(left) = node.left() {
            visit(left, items);
        }
        if let Some(right) = node.right() {
            visit(right, items);
        }
    }

    let mut items = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        visit(root, &mut items);
    }
    items
}

/// Values with each node after its subtrees.
pub fn post_order<T>(tree: &Tree<T>) -> Vec<&T> {
    fn visit<'a, T>(node: &'a Node<T>, items: &mut Vec<&'a T>) {
        if let Some(left) = node.left() {
            visit(left, items);
        }
        if let Some(right) = node.right() {
            visit(right, items);
        }
        items.push(node.value());
    }

    let mut items = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        visit(root, &mut items);
    }
    items
}

/// Values breadth first. Each level is collected before recursing into the next one.
pub fn level_order<T>(tree: &Tree<T>) -> Vec<&T> {
    fn visit<'a, T>(level: Vec<&'a Node<T>>, items: &mut Vec<&'a T>) {
        if level.is_empty() {
            return;
        }
        items.extend(level.iter().copied().map(Node::value));
        let next = level
            .iter()
            .copied()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
        visit(next, items);
    }

    let mut items = Vec::with_capacity(tree.len());
    visit(tree.root().into_iter().collect(), &mut items);
    items
}
