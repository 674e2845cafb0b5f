//! Link trait and positional vocabulary.
//!
//! Nodes never own each other. Every "pointer" is an `Option<NodeId>` slot
//! into the `Vec`-backed arena of the tree that holds the node, so the
//! parent back-reference is just another index and rotations are plain
//! index rewiring.

use std::cmp::Ordering;

/// Arena slot of a node.
///
/// Slots stay stable across `search` and `insert`; `cut` and `split` compact
/// the arena and reassign them.
pub type NodeId = u32;

/// Caller-facing reference to a node of a [`SplayTree`](crate::SplayTree).
///
/// Carries the stamp of the tree that issued it. A tree rejects handles it
/// did not issue and handles issued before its last `cut` or `split` that
/// moved nodes, since those may name a slot now holding another key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) stamp: u64,
    pub(crate) slot: NodeId,
}

impl NodeHandle {
    /// Arena slot the handle refers to.
    pub fn slot(self) -> NodeId {
        self.slot
    }
}

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<NodeId>;
    fn l(&self) -> Option<NodeId>;
    fn r(&self) -> Option<NodeId>;
    fn set_p(&mut self, v: Option<NodeId>);
    fn set_l(&mut self, v: Option<NodeId>);
    fn set_r(&mut self, v: Option<NodeId>);
}

/// Total order over keys used by every comparison in a tree.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

/// Side of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Where a node sits relative to its parent.
///
/// Derived from the parent back-reference on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Root,
    LeftChildOf(NodeId),
    RightChildOf(NodeId),
}

impl Position {
    pub fn parent(self) -> Option<NodeId> {
        match self {
            Position::Root => None,
            Position::LeftChildOf(p) | Position::RightChildOf(p) => Some(p),
        }
    }

    /// Side of the parent this position is on; `None` for the root.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Position::Root => None,
            Position::LeftChildOf(_) => Some(Direction::Left),
            Position::RightChildOf(_) => Some(Direction::Right),
        }
    }

    pub fn is_root(self) -> bool {
        matches!(self, Position::Root)
    }
}
