use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use tracing::trace;

use crate::error::SplayTreeError;
use crate::iter::{Iter, Keys, Values};
use crate::node::SplayNode;
use crate::splay::splay;
use crate::types::{Comparator, Direction, NodeHandle, NodeId, Position};
use crate::util::{self, first, last, relocate, Entry};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn fresh_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Self-adjusting binary search tree map.
///
/// Successful lookups and every insertion splay the touched node to the
/// root. Nodes live in a `Vec` arena owned by the tree; links between them
/// are slot indices.
pub struct SplayTree<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<NodeId>,
    comparator: C,
    arena: Vec<SplayNode<K, V>>,
    // Changes whenever slots are reassigned; see `NodeHandle`.
    stamp: u64,
}

impl<K: Ord, V> SplayTree<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(K::cmp)
    }

    /// Single-entry tree.
    pub fn from_pair(key: K, value: V) -> Self {
        let mut tree = Self::new();
        tree.insert(key, value);
        tree
    }

    /// Inserts entries in source order; the last one ends up at the root.
    pub fn from_map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().collect()
    }
}

impl<K: Ord> SplayTree<K, ()> {
    /// Key-only tree, e.g. for set-like use.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|k| (k, ())).collect()
    }
}

impl<K: Ord, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            stamp: fresh_stamp(),
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn root(&self) -> Option<NodeHandle> {
        self.root.map(|slot| self.handle(slot))
    }

    /// Raw root slot, for walking [`arena`](Self::arena) links directly.
    pub fn root_index(&self) -> Option<NodeId> {
        self.root
    }

    pub fn arena(&self) -> &[SplayNode<K, V>] {
        &self.arena
    }

    /// `None` for a handle from another tree or a stale one.
    pub fn node(&self, handle: NodeHandle) -> Option<&SplayNode<K, V>> {
        let slot = self.resolve(handle)?;
        Some(&self.arena[slot as usize])
    }

    pub fn position(&self, handle: NodeHandle) -> Option<Position> {
        let slot = self.resolve(handle)?;
        Some(util::position(&self.arena, slot))
    }

    fn handle(&self, slot: NodeId) -> NodeHandle {
        NodeHandle {
            stamp: self.stamp,
            slot,
        }
    }

    fn resolve(&self, handle: NodeHandle) -> Option<NodeId> {
        let live = handle.stamp == self.stamp && (handle.slot as usize) < self.arena.len();
        live.then_some(handle.slot)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of entries. Walks the whole tree.
    pub fn len(&self) -> usize {
        util::size(&self.arena, self.root)
    }

    /// Locates `key` without restructuring the tree.
    pub fn find(&self, key: &K) -> Option<NodeHandle> {
        self.find_slot(key).map(|slot| self.handle(slot))
    }

    fn find_slot(&self, key: &K) -> Option<NodeId> {
        util::search(
            &self.arena,
            self.root,
            key,
            |n| &n.k,
            |a, b| (self.comparator)(a, b),
        )
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_slot(key).is_some()
    }

    /// Looks up `key` and, on a hit, splays its node to the root.
    ///
    /// A miss leaves the tree untouched.
    pub fn search(&mut self, key: &K) -> Option<(&K, &V)> {
        let node = self.splay_to_root(key)?;
        Some(self.arena[node as usize].pair())
    }

    pub fn search_mut(&mut self, key: &K) -> Option<(&K, &mut V)> {
        let node = self.splay_to_root(key)?;
        Some(self.arena[node as usize].pair_mut())
    }

    fn splay_to_root(&mut self, key: &K) -> Option<NodeId> {
        let node = self.find_slot(key)?;
        self.root = splay(&mut self.arena, self.root, node);
        Some(node)
    }

    /// Inserts or overwrites `key` and splays its node to the root.
    ///
    /// An existing key keeps its node; only the value is replaced.
    pub fn insert(&mut self, key: K, value: V) -> (&K, &V) {
        let (node, _) = self.upsert(key, value);
        self.arena[node as usize].pair()
    }

    /// Like [`insert`](Self::insert), returning the value that was replaced.
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.upsert(key, value).1
    }

    fn upsert(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        let found = util::entry(
            &self.arena,
            self.root,
            &key,
            |n| &n.k,
            |a, b| (self.comparator)(a, b),
        );
        let (node, previous) = match found {
            Entry::Occupied(node) => {
                let slot = &mut self.arena[node as usize].v;
                (node, Some(mem::replace(slot, value)))
            }
            Entry::Vacant(at) => (util::add(&mut self.arena, SplayNode::new(key, value), at), None),
        };
        self.root = splay(&mut self.arena, self.root, node);
        (node, previous)
    }

    /// Smallest entry. Does not splay.
    pub fn minimum(&self) -> Option<(&K, &V)> {
        first(&self.arena, self.root).map(|idx| self.arena[idx as usize].pair())
    }

    /// Largest entry. Does not splay.
    pub fn maximum(&self) -> Option<(&K, &V)> {
        last(&self.arena, self.root).map(|idx| self.arena[idx as usize].pair())
    }

    pub fn min(&self) -> Result<(&K, &V), SplayTreeError> {
        self.minimum().ok_or(SplayTreeError::EmptyTree)
    }

    pub fn max(&self) -> Result<(&K, &V), SplayTreeError> {
        self.maximum().ok_or(SplayTreeError::EmptyTree)
    }

    /// Detaches the root's subtree on `direction` into a new tree with the
    /// same ordering. The root itself stays.
    ///
    /// When nodes move, handles obtained before the cut are invalidated.
    pub fn cut(&mut self, direction: Direction) -> Self
    where
        C: Clone,
    {
        let mut out = Self::with_comparator(self.comparator.clone());
        let Some(root) = self.root else {
            return out;
        };
        let Some(detached) = util::cut(&mut self.arena, root, direction) else {
            return out;
        };
        out.arena = self.take_subtree(detached);
        out.root = Some(0);
        self.stamp = fresh_stamp();
        trace!(?direction, moved = out.arena.len(), kept = self.arena.len(), "cut subtree");
        out
    }

    /// Splays `node` to the root and cuts off its right subtree.
    ///
    /// The returned tree holds every key greater than the node's key; this
    /// tree keeps the node and everything smaller. `None`, with the tree
    /// left as it is, when `node` is foreign or stale.
    pub fn split(&mut self, node: NodeHandle) -> Option<Self>
    where
        C: Clone,
    {
        let Some(slot) = self.resolve(node) else {
            trace!(?node, "split with a dead handle");
            return None;
        };
        trace!(node = slot, "split");
        self.root = splay(&mut self.arena, self.root, slot);
        Some(self.cut(Direction::Right))
    }

    /// Splits at `key`; `None` (and no change) when `key` is absent.
    pub fn split_at(&mut self, key: &K) -> Option<Self>
    where
        C: Clone,
    {
        let node = self.find(key)?;
        self.split(node)
    }

    /// Moves the already detached subtree under `detached` into a fresh
    /// arena, preserving its shape. The subtree root lands in slot 0.
    fn take_subtree(&mut self, detached: NodeId) -> Vec<SplayNode<K, V>> {
        let slots = util::subtree(&self.arena, detached);
        // Old slot -> new slot, only filled for the subtree.
        let mut remap: Vec<Option<NodeId>> = vec![None; self.arena.len()];
        for (i, &slot) in slots.iter().enumerate() {
            remap[slot as usize] = Some(i as NodeId);
        }
        let new_slot = |old: NodeId| -> NodeId {
            remap[old as usize].expect("subtree link points outside the subtree")
        };

        // Highest slot first: swap_remove then only ever pulls in a node that
        // stays behind.
        let mut order = slots.clone();
        order.sort_unstable_by(|a, b| b.cmp(a));
        let mut moved: Vec<Option<SplayNode<K, V>>> = Vec::with_capacity(slots.len());
        moved.resize_with(slots.len(), || None);
        for slot in order {
            let node = self.take_slot(slot);
            moved[new_slot(slot) as usize] = Some(node);
        }

        moved
            .into_iter()
            .flatten()
            .map(|mut node| {
                node.p = node.p.map(new_slot);
                node.l = node.l.map(new_slot);
                node.r = node.r.map(new_slot);
                node
            })
            .collect()
    }

    fn take_slot(&mut self, slot: NodeId) -> SplayNode<K, V> {
        let last = (self.arena.len() - 1) as NodeId;
        if slot != last {
            relocate(&mut self.arena, last, slot);
            if self.root == Some(last) {
                self.root = Some(slot);
            }
        }
        self.arena.swap_remove(slot as usize)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.upsert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Tree shape, one node per line: `←` marks a left child, `→` a right one.
///
/// ```text
/// Tree
/// └─ 4
///   ← 2
///   → 6
/// ```
impl<K: fmt::Display, V, C> fmt::Display for SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return write!(f, "Tree ∅");
        };
        write!(f, "Tree")?;
        let mut stack = vec![(root, 0usize, "└─")];
        while let Some((idx, depth, side)) = stack.pop() {
            let n = &self.arena[idx as usize];
            write!(f, "\n{}{side} {}", "  ".repeat(depth), n.k)?;
            if let Some(r) = n.r {
                stack.push((r, depth + 1, "→"));
            }
            if let Some(l) = n.l {
                stack.push((l, depth + 1, "←"));
            }
        }
        Ok(())
    }
}
