//! This module is responsible for loading road data from OSM extracts
//! and building the reduced road network graph.

mod assembler;
mod boundary;
mod builder;
mod config;
pub mod osm;
mod road_types;

pub use assembler::assemble_graph;
pub use boundary::{BoundaryLookup, StaticBoundaryLookup, resolve_bounding_box};
pub use builder::{build_road_graph_from_source, extract_road_graph};
pub use config::RoadGraphConfig;
pub use road_types::RoadTypeFilter;
