//! Iterative traversals. Each one keeps the nodes it still has to visit in a [`Deque`] instead
//! of on the call stack, so walking a degenerate tree can't overflow.

use std::iter::FusedIterator;

use crate::deque::Deque;
use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Lazily walks the values of this tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// All values in ascending order: left subtree, then node, then right subtree.
    pub fn items_in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// All values with every node before its subtrees: node, then left subtree, then right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(tree.items_pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn items_pre_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len());
        let mut stack: Deque<&Node<T>> = self.root().into_iter().collect();

        while let Ok(node) = stack.pop_front() {
            items.push(&node.value);
            // Right goes in first so the left subtree is finished before it comes back out.
            if let Some(right) = node.right() {
                stack.push_front(right);
            }
            if let Some(left) = node.left() {
                stack.push_front(left);
            }
        }

        items
    }

    /// All values with every node after its subtrees: left subtree, then right subtree, then
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(tree.items_post_order(), [&1, &3, &2, &5, &7, &6, &4]);
    /// ```
    pub fn items_post_order(&self) -> Vec<&T> {
        // Visiting node, right, left and reading the visits backwards gives left, right, node.
        let mut visited = Deque::new();
        let mut stack: Deque<&Node<T>> = self.root().into_iter().collect();

        while let Ok(node) = stack.pop_front() {
            visited.push_front(&node.value);
            if let Some(left) = node.left() {
                stack.push_front(left);
            }
            if let Some(right) = node.right() {
                stack.push_front(right);
            }
        }

        visited.into_iter().collect()
    }

    /// All values breadth first: the root, then every node one level down from left to right,
    /// then the next level and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_bst::Tree;
    ///
    /// let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(tree.items_level_order(), [&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn items_level_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len());
        let mut queue: Deque<&Node<T>> = self.root().into_iter().collect();

        while let Ok(node) = queue.pop_front() {
            items.push(&node.value);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }

        items
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ascending walk over the values of a [`Tree`], created by [`Tree::iter`].
///
/// Only the ancestors still waiting to be visited are held, so at most `height + 1` nodes are
/// pending at once.
pub struct Iter<'a, T> {
    pending: Deque<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            pending: Deque::new(),
        };
        iter.descend_left(root);
        iter
    }

    /// Pushes `node` and its chain of left descendants so the smallest ends up in front.
    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.pending.push_front(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop_front().ok()?;
        self.descend_left(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
