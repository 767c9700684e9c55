use itertools::Itertools;
use log::info;

use super::osm::ExtractedNetwork;
use crate::{DEFAULT_CRS, Error, RoadGraph, RoadNode, RunContext};

/// Builds the directed multigraph from an extracted node table and edge list
///
/// Nodes are added in ascending id order. Parallel edges are kept.
///
/// # Errors
///
/// Returns an error if an edge references a node missing from the node table
pub fn assemble_graph(network: ExtractedNetwork, ctx: &mut RunContext) -> Result<RoadGraph, Error> {
    let ExtractedNetwork {
        nodes,
        edges,
        stats,
    } = network;
    ctx.record(&stats);

    let mut graph = RoadGraph::with_crs(DEFAULT_CRS);
    for (id, coord) in nodes.into_iter().sorted_unstable_by_key(|(id, _)| *id) {
        graph.add_node(RoadNode::new(id, coord.x, coord.y));
    }
    for edge in edges {
        graph.add_edge(edge.source, edge.target, edge.attrs)?;
    }

    info!(
        "{ctx} Assembled graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
