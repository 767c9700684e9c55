//! TOML configuration of the command-line tool
//!
//! ```toml
//! [pipeline]
//! osm_path = "data/raw/malaysia-singapore-brunei-latest.osm.pbf"
//! road_types_path = "data/processed/road_types.txt"
//! regions = ["Selangor, Malaysia", "Kuala Lumpur, Malaysia"]
//! output_path = "data/processed/road_network.json"
//!
//! [regions."Kuala Lumpur, Malaysia"]
//! min_lon = 101.6151
//! min_lat = 3.0337
//! max_lon = 101.7589
//! max_lat = 3.2446
//! ```

use std::collections::HashMap;
use std::path::Path;

use roadnet_core::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub pipeline: RoadGraphConfig,
    /// Known region boundaries, keyed by region name
    #[serde(default)]
    pub regions: HashMap<String, BoundingBox>,
}

impl CliConfig {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn boundary_lookup(&self) -> StaticBoundaryLookup {
        self.regions
            .iter()
            .map(|(name, bbox)| (name.clone(), *bbox))
            .collect()
    }

    pub fn run_label(&self) -> &str {
        self.pipeline.run_label.as_deref().unwrap_or("roadnet")
    }
}
