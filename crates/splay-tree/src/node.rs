use crate::types::{Node, NodeId};

/// A key/value entry with its arena links.
///
/// `p` is `None` iff the node is the root of its tree.
#[derive(Debug)]
pub struct SplayNode<K, V> {
    pub p: Option<NodeId>,
    pub l: Option<NodeId>,
    pub r: Option<NodeId>,
    pub k: K,
    pub v: V,
}

impl<K, V> SplayNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
        }
    }

    pub fn pair(&self) -> (&K, &V) {
        (&self.k, &self.v)
    }

    pub fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.k, &mut self.v)
    }
}

impl<K, V> Node for SplayNode<K, V> {
    fn p(&self) -> Option<NodeId> {
        self.p
    }

    fn l(&self) -> Option<NodeId> {
        self.l
    }

    fn r(&self) -> Option<NodeId> {
        self.r
    }

    fn set_p(&mut self, v: Option<NodeId>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<NodeId>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<NodeId>) {
        self.r = v;
    }
}
