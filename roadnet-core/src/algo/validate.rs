use log::{info, warn};
use serde::Serialize;

use super::components::weakly_connected_components;
use crate::{RoadGraph, RunContext};

/// Summary of structural checks on a road graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    /// Exactly one weakly connected component
    pub weakly_connected: bool,
    /// Edges whose geometry is not a two-point segment
    pub malformed_geometry: usize,
    /// Edges without a distance attribute
    pub missing_distance: usize,
}

/// Checks connectivity and edge attributes, logging what it finds
pub fn validate_graph(graph: &RoadGraph, ctx: &RunContext) -> ValidationReport {
    info!("{ctx} Validating graph connectivity and edge attributes");

    let mut malformed_geometry = 0;
    let mut missing_distance = 0;
    for (source, target, edge) in graph.edges() {
        if edge.segment_endpoints().is_none() {
            warn!("{ctx} Edge {source} -> {target} does not have a two-point geometry");
            malformed_geometry += 1;
        }
        if edge.distance.is_none() {
            missing_distance += 1;
        }
    }

    let component_count = weakly_connected_components(graph).len();
    let report = ValidationReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count,
        weakly_connected: component_count == 1,
        malformed_geometry,
        missing_distance,
    };

    if report.weakly_connected {
        info!("{ctx} Graph is connected");
    } else {
        warn!(
            "{ctx} Graph has {} disconnected components",
            report.component_count
        );
    }
    if report.missing_distance > 0 {
        info!("{ctx} {} edges have no distance", report.missing_distance);
    }
    report
}
