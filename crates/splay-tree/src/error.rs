use thiserror::Error;

/// Errors returned by [`SplayTree`](crate::SplayTree) lookups that need an
/// element to exist.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplayTreeError {
    /// `min()` / `max()` on a tree without a root.
    #[error("no such element: the tree is empty")]
    EmptyTree,
}
