//! Rotation and bottom-up splaying over the p / l / r links.
//!
//! All functions take the arena and node indices and return the (possibly
//! new) root of the tree.

use tracing::trace;

use crate::types::{Node, NodeId};
use crate::util::{child, position, set_child, set_parent};

/// Lifts `node` one level above its parent.
///
/// Left child: right rotation. Right child: left rotation.
///
/// ```text
///       p            n
///      / \          / \
///     n   c   →    a   p
///    / \              / \
///   a   b            b   c
/// ```
///
/// The new links are worked out before any of them is written. A root
/// `node` is left in place.
pub fn rotate<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let at = position(arena, node);
    let (Some(p), Some(side)) = (at.parent(), at.direction()) else {
        return root;
    };
    let slot = position(arena, p);
    let inner = child(arena, node, side.opposite());

    set_parent(arena, node, slot);
    set_child(arena, p, side, inner);
    set_child(arena, node, side.opposite(), Some(p));

    if slot.is_root() {
        Some(node)
    } else {
        root
    }
}

/// Splays `node` to the root and returns it as the new root.
///
/// Each step looks at the node's side and its parent's side:
/// - zig: the parent is the root, one rotation;
/// - zig-zig: same sides, rotate the parent then the node;
/// - zig-zag: opposite sides, rotate the node twice.
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let mut steps = 0usize;
    loop {
        let at = position(arena, node);
        let Some(p) = at.parent() else {
            trace!(node, steps, "splayed to root");
            return Some(node);
        };
        let above = position(arena, p);
        root = if above.is_root() {
            rotate(arena, root, node)
        } else if above.direction() == at.direction() {
            let root = rotate(arena, root, p);
            rotate(arena, root, node)
        } else {
            let root = rotate(arena, root, node);
            rotate(arena, root, node)
        };
        steps += 1;
    }
}
