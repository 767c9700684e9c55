//! Reading, writing and exporting road graphs

pub mod persist;
pub mod to_geojson;

pub use persist::{load_graph, read_graph, save_graph, write_graph};
pub use to_geojson::{MAX_EXPORT_EDGES, graph_to_geojson};
