#![allow(dead_code)]

use std::cmp::Ordering;

use splay_tree::{NodeId, SplayTree};

/// Walks the tree from its root and checks parent back-references, BST
/// order and that every arena slot is reachable. Returns keys in order.
pub fn check_links<K, V, C>(tree: &SplayTree<K, V, C>) -> Vec<K>
where
    K: Clone + std::fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    let arena = tree.arena();
    let Some(root) = tree.root_index() else {
        assert!(arena.is_empty(), "empty tree with allocated nodes");
        return Vec::new();
    };
    assert_eq!(arena[root as usize].p, None, "root has a parent");

    let mut seen = 0usize;
    let mut stack: Vec<NodeId> = vec![root];
    while let Some(idx) = stack.pop() {
        seen += 1;
        let n = &arena[idx as usize];
        for child in [n.l, n.r].into_iter().flatten() {
            assert_eq!(arena[child as usize].p, Some(idx), "stale back-reference");
            stack.push(child);
        }
    }
    assert_eq!(arena.len(), seen, "unreachable arena slots");

    let keys: Vec<K> = tree.keys().cloned().collect();
    for pair in keys.windows(2) {
        assert_eq!(
            (tree.comparator())(&pair[0], &pair[1]),
            Ordering::Less,
            "keys out of order: {keys:?}"
        );
    }
    assert_eq!(keys.len(), seen);
    keys
}

pub fn root_key<K: Clone, V, C>(tree: &SplayTree<K, V, C>) -> Option<K>
where
    C: Fn(&K, &K) -> Ordering,
{
    tree.root().map(|r| tree.node(r).unwrap().k.clone())
}

/// Pre-order `(key, left key, right key)` triples.
pub fn shape<K: Clone, V, C>(tree: &SplayTree<K, V, C>) -> Vec<(K, Option<K>, Option<K>)>
where
    C: Fn(&K, &K) -> Ordering,
{
    let arena = tree.arena();
    let key = |idx: NodeId| arena[idx as usize].k.clone();
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = tree.root_index().into_iter().collect();
    while let Some(idx) = stack.pop() {
        let n = &arena[idx as usize];
        out.push((n.k.clone(), n.l.map(key), n.r.map(key)));
        stack.extend(n.r);
        stack.extend(n.l);
    }
    out
}
