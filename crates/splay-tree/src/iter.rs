//! In-order traversal.
//!
//! Iterators borrow the tree immutably, so nothing can splay while one is
//! alive. Each call to `iter()` starts a fresh walk between the minimum and
//! the maximum; both ends can be consumed.

use std::iter::FusedIterator;

use crate::node::SplayNode;
use crate::types::NodeId;
use crate::util::{first, last, next, prev};

/// Ascending `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    arena: &'a [SplayNode<K, V>],
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a [SplayNode<K, V>], root: Option<NodeId>) -> Self {
        Self {
            arena,
            front: first(arena, root),
            back: last(arena, root),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let idx = self.front?;
        if self.back == Some(idx) {
            self.front = None;
            self.back = None;
        } else {
            self.front = next(arena, idx);
        }
        Some(arena[idx as usize].pair())
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let idx = self.back?;
        if self.front == Some(idx) {
            self.front = None;
            self.back = None;
        } else {
            self.back = prev(arena, idx);
        }
        Some(arena[idx as usize].pair())
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
        }
    }
}

/// Ascending keys.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values in ascending key order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}
