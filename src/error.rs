//! The error type shared by the tree and its double-ended sequence.

use thiserror::Error;

/// Everything that can go wrong when querying or mutating a [`Tree`][crate::Tree] or popping
/// from a [`Deque`][crate::Deque].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no root so there is nothing to measure.
    #[error("tree is empty")]
    EmptyTree,

    /// No node holds the requested value.
    #[error("value not found in tree")]
    NotFound,

    /// A pop was attempted on an empty sequence.
    #[error("pop from empty sequence")]
    EmptyPop,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
