//! Directed multigraph of the road network

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{RoadEdge, RoadNode};
use crate::{DEFAULT_CRS, Error, OsmNodeId};

pub type RoadDiGraph = DiGraph<RoadNode, RoadEdge>;

/// Road network graph
///
/// Parallel edges between the same ordered pair are kept as distinct
/// edges. Every edge endpoint is a node of the graph; edges can only be
/// added between nodes that are already present.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    pub(crate) graph: RoadDiGraph,
    node_lookup: HashMap<OsmNodeId, NodeIndex>,
    crs: String,
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::with_crs(DEFAULT_CRS)
    }

    pub fn with_crs(crs: impl Into<String>) -> Self {
        Self {
            graph: RoadDiGraph::new(),
            node_lookup: HashMap::new(),
            crs: crs.into(),
        }
    }

    /// Wraps an existing petgraph graph, rebuilding the id lookup
    pub(crate) fn from_graph(graph: RoadDiGraph, crs: impl Into<String>) -> Self {
        let node_lookup = graph
            .node_indices()
            .map(|idx| (graph[idx].id, idx))
            .collect();
        Self {
            graph,
            node_lookup,
            crs: crs.into(),
        }
    }

    /// Adds a node, returning the existing index if the id is already present
    pub fn add_node(&mut self, node: RoadNode) -> NodeIndex {
        if let Some(&idx) = self.node_lookup.get(&node.id) {
            return idx;
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.node_lookup.insert(id, idx);
        idx
    }

    /// Adds a directed edge between two existing nodes
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not a node of the graph
    pub fn add_edge(
        &mut self,
        source: OsmNodeId,
        target: OsmNodeId,
        edge: RoadEdge,
    ) -> Result<EdgeIndex, Error> {
        let (Some(&from), Some(&to)) = (self.node_lookup.get(&source), self.node_lookup.get(&target))
        else {
            return Err(Error::InvalidData(format!(
                "Edge {source} -> {target} references a node missing from the graph"
            )));
        };
        Ok(self.graph.add_edge(from, to, edge))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn crs(&self) -> &str {
        &self.crs
    }

    pub fn set_crs(&mut self, crs: impl Into<String>) {
        self.crs = crs.into();
    }

    pub fn contains_node(&self, id: OsmNodeId) -> bool {
        self.node_lookup.contains_key(&id)
    }

    pub fn node(&self, id: OsmNodeId) -> Option<&RoadNode> {
        self.node_lookup.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn node_index(&self, id: OsmNodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    /// Underlying petgraph graph
    pub fn graph(&self) -> &RoadDiGraph {
        &self.graph
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.graph.node_weights()
    }

    /// All edges as `(source id, target id, attributes)`
    pub fn edges(&self) -> impl Iterator<Item = (OsmNodeId, OsmNodeId, &RoadEdge)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight(),
            )
        })
    }

    /// Edges from `source` to `target`, parallel edges included
    pub fn edges_between(&self, source: OsmNodeId, target: OsmNodeId) -> Vec<&RoadEdge> {
        match (self.node_index(source), self.node_index(target)) {
            (Some(from), Some(to)) => self
                .graph
                .edges_connecting(from, to)
                .map(|edge| edge.weight())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn edge_weights_mut(&mut self) -> impl Iterator<Item = &mut RoadEdge> {
        self.graph.edge_weights_mut()
    }
}
