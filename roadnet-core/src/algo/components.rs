//! Weakly connected components and largest-component reduction.
//!
//! Components are ordered by the smallest OSM node id they contain. When
//! several components share the greatest node count, the first one in that
//! order wins, so the reduction is reproducible across runs.

use std::cmp::Reverse;

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use log::info;
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::{Error, OsmNodeId, RoadGraph, RunContext};

/// Weakly connected components, each sorted by node index, ordered by
/// their smallest OSM node id
pub fn weakly_connected_components(graph: &RoadGraph) -> Vec<Vec<NodeIndex>> {
    let inner = graph.graph();
    let mut sets = UnionFind::<usize>::new(inner.node_count());
    for edge in inner.edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }

    let labels = sets.into_labeling();
    inner
        .node_indices()
        .into_group_map_by(|idx| labels[idx.index()])
        .into_values()
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .sorted_unstable_by_key(|component| min_node_id(graph, component))
        .collect()
}

fn min_node_id(graph: &RoadGraph, component: &[NodeIndex]) -> OsmNodeId {
    component
        .iter()
        .map(|&idx| graph.graph()[idx].id)
        .min()
        .unwrap_or(OsmNodeId::MAX)
}

/// Induced subgraph of the largest weakly connected component
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] if the graph has no nodes
pub fn largest_component(graph: &RoadGraph, ctx: &RunContext) -> Result<RoadGraph, Error> {
    info!("{ctx} Extracting largest weakly connected component");

    let components = weakly_connected_components(graph);
    let component_count = components.len();
    let largest = components
        .into_iter()
        .enumerate()
        .max_by_key(|(order, component)| (component.len(), Reverse(*order)))
        .map(|(_, component)| component)
        .ok_or(Error::EmptyGraph)?;

    let mut keep = FixedBitSet::with_capacity(graph.node_count());
    for idx in &largest {
        keep.insert(idx.index());
    }

    let reduced = graph.graph().filter_map(
        |idx, node| keep.contains(idx.index()).then(|| node.clone()),
        |_, edge| Some(edge.clone()),
    );
    let reduced = RoadGraph::from_graph(reduced, graph.crs());

    info!(
        "{ctx} Largest of {component_count} components has {} nodes and {} edges",
        reduced.node_count(),
        reduced.edge_count()
    );
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;
    use crate::{RoadEdge, RoadNode};

    fn graph(nodes: &[OsmNodeId], edges: &[(OsmNodeId, OsmNodeId)]) -> RoadGraph {
        let mut graph = RoadGraph::new();
        for &id in nodes {
            graph.add_node(RoadNode::new(id, 0.0, 0.0));
        }
        for &(source, target) in edges {
            let edge = RoadEdge::segment(
                "primary",
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 0.0, y: 0.0 },
            );
            graph.add_edge(source, target, edge).unwrap();
        }
        graph
    }

    fn ids(graph: &RoadGraph) -> Vec<OsmNodeId> {
        graph.nodes().map(|n| n.id).sorted().collect()
    }

    #[test]
    fn direction_is_ignored() {
        // 1 -> 2 <- 3 is one weak component
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (3, 2)]);
        let components = weakly_connected_components(&g);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 3);
        assert_eq!(components[1].len(), 1);
    }

    #[test]
    fn keeps_induced_subgraph_of_largest() {
        let g = graph(
            &[1, 2, 3, 10, 11, 12, 13],
            &[(1, 2), (2, 3), (10, 11), (11, 12), (12, 13), (13, 10), (10, 13)],
        );
        let reduced = largest_component(&g, &RunContext::default()).unwrap();
        assert_eq!(ids(&reduced), [10, 11, 12, 13]);
        assert_eq!(reduced.edge_count(), 5);
        assert!(reduced.edges().all(|(s, t, _)| s >= 10 && t >= 10));
        assert_eq!(reduced.crs(), g.crs());
    }

    #[test]
    fn ties_prefer_smallest_node_id() {
        let g = graph(&[50, 51, 7, 8, 30], &[(50, 51), (8, 7)]);
        let reduced = largest_component(&g, &RunContext::default()).unwrap();
        assert_eq!(ids(&reduced), [7, 8]);
    }

    #[test]
    fn isolated_nodes_only() {
        let g = graph(&[9, 4, 6], &[]);
        let reduced = largest_component(&g, &RunContext::default()).unwrap();
        assert_eq!(ids(&reduced), [4]);
        assert_eq!(reduced.edge_count(), 0);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let result = largest_component(&RoadGraph::new(), &RunContext::default());
        assert!(matches!(result, Err(Error::EmptyGraph)));
    }

    #[test]
    fn parallel_edges_survive_reduction() {
        let g = graph(&[1, 2], &[(1, 2), (1, 2), (2, 1)]);
        let reduced = largest_component(&g, &RunContext::default()).unwrap();
        assert_eq!(reduced.edge_count(), 3);
        assert_eq!(reduced.edges_between(1, 2).len(), 2);
    }
}
