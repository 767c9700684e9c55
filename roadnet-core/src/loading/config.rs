use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for building a road network graph
#[derive(Debug, Clone, Deserialize)]
pub struct RoadGraphConfig {
    /// Path to OpenStreetMap PBF file
    pub osm_path: PathBuf,
    /// Text file listing accepted `highway` values, one per line
    pub road_types_path: PathBuf,
    /// Regions whose combined bounding box is extracted
    pub regions: Vec<String>,
    /// Where the resulting graph is written
    pub output_path: PathBuf,
    /// Label attached to log records of the run
    #[serde(default)]
    pub run_label: Option<String>,
}
