//! JSON snapshot of a road graph.
//!
//! The snapshot lists nodes with their coordinates and edges with their
//! attributes. Saving never touches the in-memory graph, so a failed write
//! leaves it intact for another attempt.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use geo::{Coord, LineString};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{Error, OsmNodeId, RoadEdge, RoadGraph, RoadNode, RunContext};

#[derive(Debug, Serialize, Deserialize)]
struct GraphSnapshot {
    crs: String,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: OsmNodeId,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    source: OsmNodeId,
    target: OsmNodeId,
    highway: String,
    geometry: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
}

impl From<&RoadGraph> for GraphSnapshot {
    fn from(graph: &RoadGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id,
                x: node.x(),
                y: node.y(),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(source, target, edge)| EdgeRecord {
                source,
                target,
                highway: edge.highway.clone(),
                geometry: edge.geometry.coords().map(|c| [c.x, c.y]).collect(),
                distance: edge.distance,
            })
            .collect();
        Self {
            crs: graph.crs().to_string(),
            nodes,
            edges,
        }
    }
}

impl TryFrom<GraphSnapshot> for RoadGraph {
    type Error = Error;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        let mut graph = RoadGraph::with_crs(snapshot.crs);
        for node in snapshot.nodes {
            graph.add_node(RoadNode::new(node.id, node.x, node.y));
        }
        for edge in snapshot.edges {
            let geometry = edge
                .geometry
                .into_iter()
                .map(|[x, y]| Coord { x, y })
                .collect::<Vec<_>>();
            graph.add_edge(
                edge.source,
                edge.target,
                RoadEdge {
                    highway: edge.highway,
                    geometry: LineString::new(geometry),
                    distance: edge.distance,
                },
            )?;
        }
        Ok(graph)
    }
}

/// Serializes the graph as JSON into `writer`
///
/// # Errors
///
/// Returns an error if serialization or writing fails
pub fn write_graph<W: Write>(graph: &RoadGraph, writer: W) -> Result<(), Error> {
    serde_json::to_writer(writer, &GraphSnapshot::from(graph))?;
    Ok(())
}

/// Reads a graph previously written by [`write_graph`]
///
/// # Errors
///
/// Returns an error if the data is not a valid snapshot or an edge refers to
/// an unknown node
pub fn read_graph<R: Read>(reader: R) -> Result<RoadGraph, Error> {
    let snapshot: GraphSnapshot = serde_json::from_reader(reader)?;
    RoadGraph::try_from(snapshot)
}

/// Saves the graph to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn save_graph(graph: &RoadGraph, path: &Path, ctx: &RunContext) -> Result<(), Error> {
    info!("{ctx} Saving graph to {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_graph(graph, &mut writer)?;
    writer.flush()?;
    info!(
        "{ctx} Graph saved successfully with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Loads a graph from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn load_graph(path: &Path, ctx: &RunContext) -> Result<RoadGraph, Error> {
    info!("{ctx} Loading graph from {}", path.display());
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open graph file '{}': {}", path.display(), e),
        )
    })?;
    let graph = read_graph(BufReader::new(file))?;
    info!(
        "{ctx} Graph loaded successfully with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_with_unknown_endpoint_is_rejected() {
        let json = r#"{
            "crs": "epsg:4326",
            "nodes": [{"id": 1, "x": 101.65, "y": 3.15}],
            "edges": [{"source": 1, "target": 2, "highway": "primary",
                       "geometry": [[101.65, 3.15], [101.66, 3.16]]}]
        }"#;
        assert!(matches!(
            read_graph(json.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_persistence_error() {
        assert!(matches!(
            read_graph("{\"crs\": ".as_bytes()),
            Err(Error::PersistenceError(_))
        ));
    }

    #[test]
    fn distance_is_omitted_when_absent() {
        let mut graph = RoadGraph::new();
        graph.add_node(RoadNode::new(1, 0.0, 0.0));
        graph.add_node(RoadNode::new(2, 1.0, 1.0));
        graph
            .add_edge(
                1,
                2,
                RoadEdge::segment("primary", Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }),
            )
            .unwrap();

        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("distance"));
        assert!(text.contains("\"crs\":\"epsg:4326\""));
    }
}
