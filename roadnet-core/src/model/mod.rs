//! Data model of the road network
//!
//! Contains the bounding box, node and edge attributes and the graph container.

pub mod bbox;
pub mod components;
pub mod network;

pub use bbox::BoundingBox;
pub use components::{RoadEdge, RoadNode};
pub use network::{RoadDiGraph, RoadGraph};
