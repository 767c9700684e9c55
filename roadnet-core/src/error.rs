use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Road type list not found: {}", .0.display())]
    RoadTypesNotFound(PathBuf),
    #[error("Failed to resolve boundary of region '{region}': {reason}")]
    RegionLookup { region: String, reason: String },
    #[error("No regions provided")]
    NoRegions,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Graph has no nodes, cannot select a largest component")]
    EmptyGraph,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("OSM read error: {0}")]
    OsmError(#[from] osmpbf::Error),
    #[error("Persistence error: {0}")]
    PersistenceError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
