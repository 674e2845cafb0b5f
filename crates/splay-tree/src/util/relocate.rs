use crate::types::{Node, NodeId, Position};

use super::{get_l, get_r, position, set_l, set_p, set_r};

/// Repoints every link that refers to slot `from` so it refers to slot `to`.
///
/// Only the neighbours are rewritten: the node's own links are left as they
/// are, so the caller moves the node itself (e.g. with `Vec::swap_remove`).
/// `from` and `to` must not be linked to each other.
pub fn relocate<N: Node>(arena: &mut [N], from: NodeId, to: NodeId) {
    if from == to {
        return;
    }
    match position(arena, from) {
        Position::Root => {}
        Position::LeftChildOf(p) => set_l(arena, p, Some(to)),
        Position::RightChildOf(p) => set_r(arena, p, Some(to)),
    }
    if let Some(l) = get_l(arena, from) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, from) {
        set_p(arena, r, Some(to));
    }
}
