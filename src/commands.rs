use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use roadnet_core::prelude::*;
use tracing::info;

use crate::config::CliConfig;

/// Builds the reduced graph and saves it
#[allow(clippy::cast_possible_truncation)]
pub fn extract(config: &CliConfig, output: Option<&Path>) -> Result<(), Error> {
    let mut ctx = RunContext::new(config.run_label());
    let graph = extract_road_graph(&config.pipeline, &config.boundary_lookup(), &mut ctx)?;
    let output = output.unwrap_or(config.pipeline.output_path.as_path());
    save_graph(&graph, output, &ctx)?;
    info!(
        elapsed_ms = ctx.elapsed().as_millis() as u64,
        "Extraction finished"
    );
    Ok(())
}

/// Adds geodesic distances to a saved graph
pub fn annotate(input: &Path, output: &Path) -> Result<(), Error> {
    let ctx = RunContext::new("annotate");
    let mut graph = load_graph(input, &ctx)?;
    let annotated = annotate_distances(&mut graph, &ctx);
    save_graph(&graph, output, &ctx)?;
    info!(annotated, "Distances written to {}", output.display());
    Ok(())
}

/// Extraction followed by distance annotation in one run
#[allow(clippy::cast_possible_truncation)]
pub fn run(config: &CliConfig, output: Option<&Path>) -> Result<(), Error> {
    let mut ctx = RunContext::new(config.run_label());
    let mut graph = extract_road_graph(&config.pipeline, &config.boundary_lookup(), &mut ctx)?;
    annotate_distances(&mut graph, &ctx);
    let output = output.unwrap_or(config.pipeline.output_path.as_path());
    save_graph(&graph, output, &ctx)?;

    let stats = ctx.stats();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        ways_used = stats.ways_used,
        segments_dropped = stats.segments_dropped,
        elapsed_ms = ctx.elapsed().as_millis() as u64,
        "Pipeline finished"
    );
    Ok(())
}

/// Prints a validation report of a saved graph as JSON
pub fn validate(input: &Path, out: &mut impl Write) -> Result<ValidationReport, Error> {
    let ctx = RunContext::new("validate");
    let graph = load_graph(input, &ctx)?;
    let report = validate_graph(&graph, &ctx);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report)
}

/// Writes the edges of a saved graph as `GeoJSON`
pub fn export(input: &Path, output: &Path, max_edges: usize) -> Result<usize, Error> {
    let ctx = RunContext::new("export");
    let graph = load_graph(input, &ctx)?;
    let collection = graph_to_geojson(&graph, max_edges)?;
    let exported = collection.features.len();

    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;
    info!(exported, "GeoJSON written to {}", output.display());
    Ok(exported)
}
