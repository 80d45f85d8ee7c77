use std::mem;

/// An owned, possibly empty child slot. The root of a [`Tree`][crate::Tree] is one of these too.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node in a [`Tree`][crate::Tree]. It owns its value and up to two children: every
/// value in the left subtree is smaller than this node's value and every value in the right
/// subtree is larger.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has at least one child.
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of edges on the longest downward path from this node to a leaf. A leaf has a
    /// height of 0.
    ///
    /// This walks the whole subtree every time it is called.
    pub fn height(&self) -> usize {
        let left_height = self.left().map_or(0, |n| n.height() + 1);
        let right_height = self.right().map_or(0, |n| n.height() + 1);
        left_height.max(right_height)
    }

    /// Unlinks this node from the tree, returning its value and whatever should take its place
    /// in its parent's slot.
    ///
    /// - A leaf leaves an empty slot behind.
    /// - A node with a single child is replaced by that child (and the child's whole subtree).
    /// - A node with two children keeps its position but takes the value of its in-order
    ///   predecessor (the largest value in its left subtree), which is unlinked in turn. The
    ///   predecessor never has a right child so unlinking it is one of the cases above.
    pub(crate) fn unlink(mut self: Box<Self>) -> (T, Link<T>) {
        if self.right.is_some() {
            if let Some(predecessor) = take_max(&mut self.left) {
                let value = mem::replace(&mut self.value, predecessor);
                return (value, Some(self));
            }
        }

        let child = self.left.take().or_else(|| self.right.take());
        (self.value, child)
    }
}

/// Walks the right spine starting at `link`, stopping at the slot holding the largest node
/// (or at `link` itself if it is empty).
fn rightmost<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    loop {
        let has_right = link.as_deref().map_or(false, |n| n.right.is_some());
        link = match (has_right, link) {
            (true, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Removes the largest node of the subtree rooted at `link` and returns its value. Its left
/// subtree (if any) is spliced into its place.
fn take_max<T>(link: &mut Link<T>) -> Option<T> {
    let slot = rightmost(link);
    let mut max = slot.take()?;
    *slot = max.left.take();
    Some(max.value)
}
