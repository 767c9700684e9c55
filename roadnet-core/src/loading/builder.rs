use log::{debug, info};

use super::config::RoadGraphConfig;
use super::osm::{OsmSource, PbfSource, StreamingGraphExtractor};
use super::{BoundaryLookup, RoadTypeFilter, assemble_graph, resolve_bounding_box};
use crate::{BoundingBox, Error, RoadGraph, RunContext, largest_component};

/// Builds the reduced road graph described by the configuration
///
/// Configuration problems (missing files, unknown regions) are reported
/// before the OSM extract is opened.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a region cannot be
/// resolved, the extract cannot be read or the resulting graph is empty
pub fn extract_road_graph<L>(
    config: &RoadGraphConfig,
    lookup: &L,
    ctx: &mut RunContext,
) -> Result<RoadGraph, Error>
where
    L: BoundaryLookup + ?Sized,
{
    validate_config(config)?;

    let bbox = resolve_bounding_box(lookup, &config.regions, ctx)?;
    let road_types = RoadTypeFilter::from_file(&config.road_types_path)?;
    info!(
        "{ctx} Loaded {} road types from {}",
        road_types.len(),
        config.road_types_path.display()
    );

    info!(
        "{ctx} Processing street data (OSM): {}",
        config.osm_path.display()
    );
    build_road_graph_from_source(PbfSource::new(&config.osm_path), bbox, &road_types, ctx)
}

/// Extracts, assembles and reduces a road graph from any element source
///
/// # Errors
///
/// Returns an error if the source fails or no node falls inside `bbox`
pub fn build_road_graph_from_source<S: OsmSource>(
    source: S,
    bbox: BoundingBox,
    road_types: &RoadTypeFilter,
    ctx: &mut RunContext,
) -> Result<RoadGraph, Error> {
    let mut extractor = StreamingGraphExtractor::new(bbox, road_types);
    source.apply(&mut extractor)?;

    let network = extractor.into_network();
    let stats = network.stats;
    info!(
        "{ctx} Kept {} of {} nodes, {} of {} ways produced {} edges",
        stats.nodes_kept, stats.nodes_seen, stats.ways_used, stats.ways_seen, stats.edges_emitted
    );
    debug!(
        "{ctx} Skipped {} unclassified ways, {} ways with unlisted road type, {} segments crossing the boundary",
        stats.ways_unclassified, stats.ways_rejected, stats.segments_dropped
    );

    let graph = assemble_graph(network, ctx)?;
    release_heap(ctx);

    largest_component(&graph, ctx)
}

fn validate_config(config: &RoadGraphConfig) -> Result<(), Error> {
    if config.regions.is_empty() {
        return Err(Error::NoRegions);
    }

    if !config.road_types_path.exists() {
        return Err(Error::RoadTypesNotFound(config.road_types_path.clone()));
    }

    if !config.osm_path.exists() {
        return Err(Error::InvalidConfig(format!(
            "OSM file not found: {}",
            config.osm_path.display()
        )));
    }

    Ok(())
}

// Parsing the extract allocates heavily and glibc does not always hand the
// freed pages back. Trim the heap once the node table has been consumed.
fn release_heap(ctx: &RunContext) {
    // # Safety
    //
    // `malloc_trim` only touches allocator-internal state and is safe to call
    // on linux with the glibc allocator, which the cfg attribute guarantees.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        if libc::malloc_trim(0) == 0 {
            log::warn!("{ctx} Memory trimming failed - continuing anyway");
        } else {
            debug!("{ctx} Successfully trimmed unused heap memory");
        }
    }
    #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
    let _ = ctx;
}
