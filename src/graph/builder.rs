use fnv::FnvHashMap;
use log::{debug, trace, warn};
use thiserror::Error;

use super::{Edge, Graph, Node, NodeId};
use crate::flat::ColoringInstance;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),
}

type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
    duplicates: usize,
}

impl GraphBuilder {
    /// `nbnodes` and `nbedges` are the header's declared counts. They are
    /// only recorded: the node and edge sets grow from the edges actually added.
    pub fn new(nbnodes: usize, nbedges: usize) -> GraphBuilder {
        GraphBuilder {
            graph: Graph {
                nbnodes,
                nbedges,
                nodes: FnvHashMap::default(),
                edges: FnvHashMap::default(),
            },
            duplicates: 0,
        }
    }

    /// Adds the undirected edge `a - b`, creating missing endpoints.
    /// Returns false if the edge was already present, in either orientation.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        let nodes = &mut self.graph.nodes;
        nodes.entry(a).or_insert_with(|| Node::new(a)).neighbors.insert(b);
        nodes.entry(b).or_insert_with(|| Node::new(b)).neighbors.insert(a);

        let edge = Edge::new(a, b);
        if self.graph.edges.contains_key(&edge.id) {
            trace!("duplicate edge: {:?}", edge.id);
            self.duplicates += 1;
            return Ok(false);
        }
        trace!("edge: {:?}", edge.id);
        self.graph.edges.insert(edge.id, edge);
        Ok(true)
    }

    pub fn build(self) -> Graph {
        let graph = self.graph;
        if self.duplicates > 0 {
            warn!("collapsed {} duplicate edges", self.duplicates);
        }
        if graph.node_count() != graph.nbnodes {
            warn!(
                "header declares {} nodes but edges reference {}",
                graph.nbnodes,
                graph.node_count()
            );
        }
        debug!(
            "built graph: {} nodes, {} edges, max degree {}",
            graph.node_count(),
            graph.edge_count(),
            graph.max_degree()
        );
        graph
    }
}

pub fn build_graph(instance: &ColoringInstance) -> Result<Graph> {
    let mut builder = GraphBuilder::new(instance.nbnodes, instance.nbedges());
    for &(a, b) in &instance.edges {
        builder.add_edge(a, b)?;
    }
    Ok(builder.build())
}
