use std::fmt;

use super::NodeId;

/// Order-independent identity of an undirected edge: the endpoints are
/// stored smallest first, so `(a, b)` and `(b, a)` compare equal.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeId {
    low: NodeId,
    high: NodeId,
}

impl EdgeId {
    pub fn new(a: NodeId, b: NodeId) -> EdgeId {
        if a <= b {
            EdgeId { low: a, high: b }
        } else {
            EdgeId { low: b, high: a }
        }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }
}

// min_max
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.low, self.high)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "e{}", self)
    }
}

/// An edge as first seen in the input. `snode` and `enode` keep the input
/// orientation; identity is given by `id` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub snode: NodeId,
    pub enode: NodeId,
}

impl Edge {
    pub fn new(snode: NodeId, enode: NodeId) -> Edge {
        Edge {
            id: EdgeId::new(snode, enode),
            snode,
            enode,
        }
    }
}
