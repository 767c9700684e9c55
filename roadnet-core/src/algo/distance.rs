use geo::{Coord, Distance, Geodesic, Point};
use log::info;
use rayon::prelude::*;

use crate::{RoadGraph, RunContext};

/// Geodesic distance in meters on the WGS84 ellipsoid between two
/// `(lon, lat)` coordinates
pub fn geodesic_distance(start: Coord<f64>, end: Coord<f64>) -> f64 {
    Geodesic.distance(Point::from(start), Point::from(end))
}

/// Stores the geodesic length of every two-point edge as its distance
///
/// Edges whose geometry is not exactly two points are left untouched.
/// Returns the number of annotated edges.
pub fn annotate_distances(graph: &mut RoadGraph, ctx: &RunContext) -> usize {
    info!("{ctx} Adding geodesic distances to {} edges", graph.edge_count());

    let annotated = graph
        .graph
        .edge_weights_mut()
        .par_bridge()
        .filter_map(|edge| {
            let (start, end) = edge.segment_endpoints()?;
            edge.distance = Some(geodesic_distance(start, end));
            Some(())
        })
        .count();

    let skipped = graph.edge_count() - annotated;
    if skipped > 0 {
        info!("{ctx} {skipped} edges without two-point geometry left unannotated");
    }
    annotated
}
