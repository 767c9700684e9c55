//! Road network extraction from OpenStreetMap extracts.
//!
//! The pipeline streams an `.osm.pbf` file, keeps nodes inside a bounding
//! box and classified road ways, assembles a directed multigraph, reduces it
//! to its largest weakly connected component and annotates edges with
//! geodesic length.

pub mod algo;
pub mod context;
mod error;
pub mod io;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::Error;

pub use algo::components::{largest_component, weakly_connected_components};
pub use algo::distance::{annotate_distances, geodesic_distance};
pub use algo::validate::{ValidationReport, validate_graph};
pub use context::RunContext;
pub use io::persist::{load_graph, save_graph};
pub use io::to_geojson::{MAX_EXPORT_EDGES, graph_to_geojson};
pub use loading::{
    BoundaryLookup, RoadGraphConfig, RoadTypeFilter, StaticBoundaryLookup,
    build_road_graph_from_source, extract_road_graph, resolve_bounding_box,
};
pub use model::{BoundingBox, RoadEdge, RoadGraph, RoadNode};

/// OSM identifier of a node
pub type OsmNodeId = i64;
/// OSM identifier of a way
pub type OsmWayId = i64;

/// Coordinate reference system tag attached to every assembled graph
pub const DEFAULT_CRS: &str = "epsg:4326";
