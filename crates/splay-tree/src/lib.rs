//! Arena-backed splay tree.
//!
//! A self-adjusting binary search tree: every successful lookup and every
//! insertion rotates the touched node up to the root, so recently used keys
//! stay cheap to reach. No balance metadata is stored.
//!
//! Nodes never own each other. All "pointers" (parent, left, right) are
//! `Option<u32>` slots into a `Vec` arena owned by the tree, which makes the
//! parent back-reference an ordinary index and rotations plain rewiring.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`NodeHandle`], [`Direction`], [`Position`] |
//! [`node`] | [`SplayNode`] key/value node |
//! [`util`] | descent, extremes, traversal, subtree detachment |
//! [`splay`] | [`rotate`] and [`splay()`](splay::splay) |
//! [`tree`] | [`SplayTree`] map API, `cut` / `split` |
//! [`iter`] | in-order iterators |
//!
//! # Example
//!
//! ```
//! use splay_tree::{Direction, SplayTree};
//!
//! let mut tree = SplayTree::from_map([(1, "a"), (3, "b"), (5, "c"), (7, "d")]);
//! assert_eq!(tree.search(&3), Some((&3, &"b")));
//! assert_eq!(tree.node(tree.root().unwrap()).unwrap().k, 3);
//!
//! let upper = tree.split_at(&3).unwrap();
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
//! assert_eq!(upper.keys().copied().collect::<Vec<_>>(), vec![5, 7]);
//!
//! let lower = tree.cut(Direction::Left);
//! assert_eq!(lower.min(), Ok((&1, &"a")));
//! ```

pub mod error;
pub mod iter;
pub mod node;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use error::SplayTreeError;
pub use iter::{Iter, Keys, Values};
pub use node::SplayNode;
pub use splay::{rotate, splay};
pub use tree::SplayTree;
pub use types::{Comparator, Direction, Node, NodeHandle, NodeId, Position};
