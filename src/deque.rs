//! A double-ended sequence. The iterative traversals use it both as a LIFO (pushing and popping
//! at the front) and as a FIFO (pushing at the back, popping at the front).
//!
//! # Examples
//!
//! ```
//! use classic_bst::{Deque, TreeError};
//!
//! let mut deque = Deque::new();
//! deque.push_back(2);
//! deque.push_front(1);
//!
//! assert_eq!(deque.len(), 2);
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_front(), Ok(2));
//! assert_eq!(deque.pop_front(), Err(TreeError::EmptyPop));
//! ```

use std::collections::VecDeque;

use crate::error::{TreeError, TreeResult};

/// A growable sequence supporting pushes at both ends and pops at either end.
#[derive(Clone, Debug)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Generates a new, empty `Deque`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Returns how many items are waiting in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is waiting in the sequence.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Puts `item` in front of everything else.
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Puts `item` behind everything else.
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyPop`] if the sequence is empty.
    pub fn pop_front(&mut self) -> TreeResult<T> {
        self.items.pop_front().ok_or(TreeError::EmptyPop)
    }

    /// Removes and returns the back item.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyPop`] if the sequence is empty.
    pub fn pop_back(&mut self) -> TreeResult<T> {
        self.items.pop_back().ok_or(TreeError::EmptyPop)
    }

    /// Borrows the front item without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    /// Consumes the sequence front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
