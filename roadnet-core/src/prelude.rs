// Re-export key components
pub use crate::algo::{
    ValidationReport, annotate_distances, geodesic_distance, largest_component, validate_graph,
    weakly_connected_components,
};
pub use crate::context::{ExtractStats, RunContext};
pub use crate::io::{graph_to_geojson, load_graph, save_graph};
pub use crate::loading::osm::{
    MemorySource, OsmElement, OsmHandler, OsmNode, OsmSource, OsmWay, PbfSource,
};
pub use crate::loading::{
    BoundaryLookup, RoadGraphConfig, RoadTypeFilter, StaticBoundaryLookup,
    build_road_graph_from_source, extract_road_graph, resolve_bounding_box,
};
pub use crate::model::{BoundingBox, RoadEdge, RoadGraph, RoadNode};

// Core identifier types
pub use crate::Error;
pub use crate::OsmNodeId;
pub use crate::OsmWayId;
