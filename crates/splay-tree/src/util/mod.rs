//! Arena primitives over the parent / left / right links.
//!
//! Everything here is local to a node or a single descent: no function in
//! this module rotates. Key-based helpers take a `key_of` accessor and a
//! comparator so they work for any [`Node`] layout.

pub mod relocate;

use std::cmp::Ordering;

use crate::types::{Direction, Node, NodeId, Position};

pub use relocate::relocate;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_r(v);
}

/// Child of `idx` on the given side.
#[inline]
pub fn child<N: Node>(arena: &[N], idx: NodeId, direction: Direction) -> Option<NodeId> {
    match direction {
        Direction::Left => get_l(arena, idx),
        Direction::Right => get_r(arena, idx),
    }
}

/// Links `child` under `parent` on the given side and points the child's
/// back-reference at `parent`. The previous occupant of the slot is not
/// touched.
pub fn set_child<N: Node>(
    arena: &mut [N],
    parent: NodeId,
    direction: Direction,
    child: Option<NodeId>,
) {
    match direction {
        Direction::Left => set_l(arena, parent, child),
        Direction::Right => set_r(arena, parent, child),
    }
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

pub fn set_left<N: Node>(arena: &mut [N], parent: NodeId, child: Option<NodeId>) {
    set_child(arena, parent, Direction::Left, child);
}

pub fn set_right<N: Node>(arena: &mut [N], parent: NodeId, child: Option<NodeId>) {
    set_child(arena, parent, Direction::Right, child);
}

/// Places `node` into `at`: the root slot, or a child slot of another node.
pub fn set_parent<N: Node>(arena: &mut [N], node: NodeId, at: Position) {
    match at {
        Position::Root => set_p(arena, node, None),
        Position::LeftChildOf(p) => set_left(arena, p, Some(node)),
        Position::RightChildOf(p) => set_right(arena, p, Some(node)),
    }
}

/// Classifies `node` against its parent's stored children.
pub fn position<N: Node>(arena: &[N], node: NodeId) -> Position {
    match get_p(arena, node) {
        None => Position::Root,
        Some(p) if get_l(arena, p) == Some(node) => Position::LeftChildOf(p),
        Some(p) => Position::RightChildOf(p),
    }
}

/// Minimum of the subtree under `idx`.
pub fn leftist<N: Node>(arena: &[N], mut idx: NodeId) -> NodeId {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Maximum of the subtree under `idx`.
pub fn rightist<N: Node>(arena: &[N], mut idx: NodeId) -> NodeId {
    while let Some(r) = get_r(arena, idx) {
        idx = r;
    }
    idx
}

pub fn first<N: Node>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| leftist(arena, r))
}

pub fn last<N: Node>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| rightist(arena, r))
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: NodeId) -> Option<NodeId> {
    if let Some(r) = get_r(arena, curr) {
        return Some(leftist(arena, r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: NodeId) -> Option<NodeId> {
    if let Some(l) = get_l(arena, curr) {
        return Some(rightist(arena, l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Slots of the subtree under `root` in pre-order.
///
/// Iterative: splay trees can degenerate into a path as deep as the tree.
pub fn subtree<N: Node>(arena: &[N], root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        out.push(idx);
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
    }
    out
}

/// Number of nodes under `root`. Walks the whole subtree.
pub fn size<N: Node>(arena: &[N], root: Option<NodeId>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(idx) = curr {
        count += 1;
        curr = next(arena, idx);
    }
    count
}

/// Finds the node holding `key`. No structural change.
pub fn search<N, K, F, C>(
    arena: &[N],
    root: Option<NodeId>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<NodeId>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Outcome of an insertion descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A node with an equal key already exists.
    Occupied(NodeId),
    /// The empty slot a new node for the key belongs in.
    Vacant(Position),
}

/// Descends from `root` the way an insertion of `key` would.
pub fn entry<N, K, F, C>(
    arena: &[N],
    root: Option<NodeId>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Entry
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        return Entry::Vacant(Position::Root);
    };
    loop {
        let next = match comparator(key, key_of(&arena[curr as usize])) {
            Ordering::Equal => return Entry::Occupied(curr),
            Ordering::Less => get_l(arena, curr).ok_or(Position::LeftChildOf(curr)),
            Ordering::Greater => get_r(arena, curr).ok_or(Position::RightChildOf(curr)),
        };
        match next {
            Ok(nxt) => curr = nxt,
            Err(at) => return Entry::Vacant(at),
        }
    }
}

/// Slot the next pushed node will occupy.
pub(crate) fn next_slot(len: usize) -> NodeId {
    NodeId::try_from(len).expect("arena is full: slots are u32")
}

/// Allocates `node` in the arena and attaches it at `at`.
pub fn add<N: Node>(arena: &mut Vec<N>, node: N, at: Position) -> NodeId {
    let idx = next_slot(arena.len());
    arena.push(node);
    set_parent(arena, idx, at);
    idx
}

/// Detaches the child of `idx` on the given side and returns it as a new,
/// parentless subtree root.
pub fn cut<N: Node>(arena: &mut [N], idx: NodeId, direction: Direction) -> Option<NodeId> {
    let detached = child(arena, idx, direction)?;
    match direction {
        Direction::Left => set_l(arena, idx, None),
        Direction::Right => set_r(arena, idx, None),
    }
    set_p(arena, detached, None);
    Some(detached)
}
