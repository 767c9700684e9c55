//! Graph algorithms applied after assembly

pub mod components;
pub mod distance;
pub mod validate;

pub use components::{largest_component, weakly_connected_components};
pub use distance::{annotate_distances, geodesic_distance};
pub use validate::{ValidationReport, validate_graph};
