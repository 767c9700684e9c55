//! OSM pbf processing

mod extractor;
mod source;

pub use extractor::{ExtractedNetwork, RawEdge, StreamingGraphExtractor};
pub use source::{MemorySource, OsmElement, OsmHandler, OsmNode, OsmSource, OsmWay, PbfSource};
