// The `graph` module holds the undirected graph of a coloring instance. Nodes live in an arena
// keyed by id; neighbor sets and edges refer to nodes by id only.
mod builder;
mod edge;

pub use crate::graph::builder::{build_graph, GraphBuilder, GraphError};
pub use crate::graph::edge::{Edge, EdgeId};

use std::fmt;

use fnv::{FnvHashMap, FnvHashSet};
use itertools::Itertools;
use lazy_static::lazy_static;

lazy_static! {
    static ref NO_NEIGHBORS: FnvHashSet<NodeId> = FnvHashSet::default();
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub(crate) neighbors: FnvHashSet<NodeId>,
}

impl Node {
    fn new(id: NodeId) -> Node {
        Node {
            id,
            neighbors: FnvHashSet::default(),
        }
    }

    pub fn neighbors(&self) -> &FnvHashSet<NodeId> {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[derive(Clone)]
pub struct Graph {
    pub(crate) nbnodes: usize,
    pub(crate) nbedges: usize,
    pub(crate) nodes: FnvHashMap<NodeId, Node>,
    pub(crate) edges: FnvHashMap<EdgeId, Edge>,
}

impl Graph {
    /// Node count from the instance header. Not authoritative: see [`Graph::node_count`].
    pub fn declared_node_count(&self) -> usize {
        self.nbnodes
    }

    pub fn declared_edge_count(&self) -> usize {
        self.nbedges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Nodes in increasing id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().sorted_by_key(|n| n.id)
    }

    /// Edges in increasing canonical id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().sorted_by_key(|e| e.id)
    }

    /// Neighbors of `id`; empty if the node is not in the graph.
    pub fn neighbors(&self, id: NodeId) -> &FnvHashSet<NodeId> {
        match self.nodes.get(&id) {
            Some(node) => &node.neighbors,
            None => &NO_NEIGHBORS,
        }
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn max_degree(&self) -> usize {
        self.nodes.values().map(|n| n.degree()).max().unwrap_or(0)
    }

    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains_key(&EdgeId::new(a, b))
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Graph {{ nodes={}, edges=[{}] }}",
            self.node_count(),
            self.edges().map(|e| e.id.to_string()).join(", ")
        )
    }
}
