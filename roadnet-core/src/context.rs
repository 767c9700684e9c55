//! Per-run logging and statistics handle.
//!
//! Every pipeline stage receives a [`RunContext`] instead of reaching for
//! process-wide state. The context labels log records with the run it
//! belongs to and accumulates counters for silently skipped input.

use std::fmt;
use std::time::{Duration, Instant};

/// Counters for input that the extractor skips without failing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Node elements seen in the source
    pub nodes_seen: usize,
    /// Nodes stored because they fall inside the bounding box
    pub nodes_kept: usize,
    /// Way elements seen in the source
    pub ways_seen: usize,
    /// Ways without a `highway` tag
    pub ways_unclassified: usize,
    /// Ways whose road type is not in the allow-list
    pub ways_rejected: usize,
    /// Ways that produced at least one edge
    pub ways_used: usize,
    /// Consecutive node pairs dropped because an endpoint is outside the box
    pub segments_dropped: usize,
    /// Directed edges emitted
    pub edges_emitted: usize,
}

impl ExtractStats {
    pub(crate) fn merge(&mut self, other: &Self) {
        self.nodes_seen += other.nodes_seen;
        self.nodes_kept += other.nodes_kept;
        self.ways_seen += other.ways_seen;
        self.ways_unclassified += other.ways_unclassified;
        self.ways_rejected += other.ways_rejected;
        self.ways_used += other.ways_used;
        self.segments_dropped += other.segments_dropped;
        self.edges_emitted += other.edges_emitted;
    }
}

/// Context scoped to a single pipeline run
#[derive(Debug)]
pub struct RunContext {
    label: String,
    started: Instant,
    stats: ExtractStats,
}

impl RunContext {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
            stats: ExtractStats::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Statistics collected by the extraction stage of this run
    pub fn stats(&self) -> &ExtractStats {
        &self.stats
    }

    pub(crate) fn record(&mut self, stats: &ExtractStats) {
        self.stats.merge(stats);
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new("roadnet")
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_label() {
        let ctx = RunContext::new("kl");
        assert_eq!(ctx.to_string(), "[kl]");
    }

    #[test]
    fn record_accumulates() {
        let mut ctx = RunContext::default();
        let stats = ExtractStats {
            nodes_seen: 3,
            edges_emitted: 2,
            ..ExtractStats::default()
        };
        ctx.record(&stats);
        ctx.record(&stats);
        assert_eq!(ctx.stats().nodes_seen, 6);
        assert_eq!(ctx.stats().edges_emitted, 4);
    }
}
