use geo::{Coord, coord};
use hashbrown::HashMap;
use itertools::Itertools;

use super::source::{OsmHandler, OsmNode, OsmWay};
use crate::context::ExtractStats;
use crate::{BoundingBox, OsmNodeId, RoadEdge, RoadTypeFilter};

const ROAD_TAG: &str = "highway";
const ONEWAY_TAG: &str = "oneway";
const ONEWAY_VALUES: [&str; 3] = ["yes", "true", "1"];

/// Directed edge produced by extraction, before graph assembly
#[derive(Debug, Clone, PartialEq)]
pub struct RawEdge {
    pub source: OsmNodeId,
    pub target: OsmNodeId,
    pub attrs: RoadEdge,
}

/// Node table and edge list collected in one pass
#[derive(Debug, Clone, Default)]
pub struct ExtractedNetwork {
    pub nodes: HashMap<OsmNodeId, Coord<f64>>,
    pub edges: Vec<RawEdge>,
    pub stats: ExtractStats,
}

/// Collects in-box nodes and classified road segments from an element stream
///
/// Relies on the source delivering nodes before the ways that reference them.
/// Segments with an endpoint outside the box are dropped, which can split a
/// way that crosses the boundary into disconnected pieces.
#[derive(Debug)]
pub struct StreamingGraphExtractor<'a> {
    bbox: BoundingBox,
    road_types: &'a RoadTypeFilter,
    network: ExtractedNetwork,
}

impl<'a> StreamingGraphExtractor<'a> {
    pub fn new(bbox: BoundingBox, road_types: &'a RoadTypeFilter) -> Self {
        Self {
            bbox,
            road_types,
            network: ExtractedNetwork::default(),
        }
    }

    pub fn stats(&self) -> &ExtractStats {
        &self.network.stats
    }

    pub fn into_network(self) -> ExtractedNetwork {
        self.network
    }
}

fn is_oneway(way: &OsmWay) -> bool {
    way.tag(ONEWAY_TAG).is_some_and(|value| {
        ONEWAY_VALUES
            .iter()
            .any(|accepted| value.eq_ignore_ascii_case(accepted))
    })
}

impl OsmHandler for StreamingGraphExtractor<'_> {
    fn node(&mut self, node: &OsmNode) {
        self.network.stats.nodes_seen += 1;
        if !self.bbox.contains(node.lon, node.lat) {
            return;
        }
        let previous = self
            .network
            .nodes
            .insert(node.id, coord! { x: node.lon, y: node.lat });
        // a repeated id overwrites its entry and is kept once
        if previous.is_none() {
            self.network.stats.nodes_kept += 1;
        }
    }

    fn way(&mut self, way: &OsmWay) {
        let stats = &mut self.network.stats;
        stats.ways_seen += 1;

        let Some(road_type) = way.tag(ROAD_TAG) else {
            stats.ways_unclassified += 1;
            return;
        };
        if !self.road_types.accepts(road_type) {
            stats.ways_rejected += 1;
            return;
        }
        let oneway = is_oneway(way);

        let mut emitted = 0;
        for (start, end) in way.refs.iter().tuple_windows() {
            let (Some(&from), Some(&to)) =
                (self.network.nodes.get(start), self.network.nodes.get(end))
            else {
                stats.segments_dropped += 1;
                continue;
            };

            let forward = RoadEdge::segment(road_type, from, to);
            let backward = (!oneway).then(|| forward.reversed());
            self.network.edges.push(RawEdge {
                source: *start,
                target: *end,
                attrs: forward,
            });
            emitted += 1;
            if let Some(attrs) = backward {
                self.network.edges.push(RawEdge {
                    source: *end,
                    target: *start,
                    attrs,
                });
                emitted += 1;
            }
        }

        if emitted > 0 {
            stats.ways_used += 1;
            stats.edges_emitted += emitted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::osm::{MemorySource, OsmSource};

    fn bbox() -> BoundingBox {
        BoundingBox::new(101.60, 3.10, 101.70, 3.20)
    }

    fn road_types() -> RoadTypeFilter {
        RoadTypeFilter::from_tokens(["primary", "secondary", "residential"])
    }

    fn extract(source: MemorySource) -> ExtractedNetwork {
        let filter = road_types();
        let mut extractor = StreamingGraphExtractor::new(bbox(), &filter);
        source.apply(&mut extractor).unwrap();
        extractor.into_network()
    }

    #[test]
    fn keeps_only_nodes_inside_box() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.60, 3.20)
                .node(3, 101.71, 3.15)
                .node(4, 101.65, 3.09),
        );
        let mut ids: Vec<_> = network.nodes.keys().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2]);
        assert_eq!(network.stats.nodes_seen, 4);
        assert_eq!(network.stats.nodes_kept, 2);
    }

    #[test]
    fn repeated_node_id_is_kept_once() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.66, 3.16)
                .node(1, 101.67, 3.17),
        );
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.nodes[&1], coord! { x: 101.67, y: 3.17 });
        assert_eq!(network.stats.nodes_seen, 3);
        assert_eq!(network.stats.nodes_kept, network.nodes.len());
    }

    #[test]
    fn two_way_road_emits_both_directions() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.66, 3.16)
                .way(OsmWay::new(100, vec![1, 2]).with_tag("highway", "secondary")),
        );
        assert_eq!(network.edges.len(), 2);
        let forward = network.edges.iter().find(|e| e.source == 1).unwrap();
        let backward = network.edges.iter().find(|e| e.source == 2).unwrap();
        assert_eq!(forward.target, 2);
        assert_eq!(backward.target, 1);
        assert_eq!(backward.attrs.highway, "secondary");

        let mut reversed = forward.attrs.geometry.0.clone();
        reversed.reverse();
        assert_eq!(backward.attrs.geometry.0, reversed);
    }

    #[test]
    fn oneway_values_are_case_insensitive() {
        for value in ["yes", "YES", "True", "1"] {
            let network = extract(
                MemorySource::default()
                    .node(1, 101.65, 3.15)
                    .node(2, 101.66, 3.16)
                    .way(
                        OsmWay::new(100, vec![1, 2])
                            .with_tag("highway", "primary")
                            .with_tag("oneway", value),
                    ),
            );
            assert_eq!(network.edges.len(), 1, "oneway={value}");
            assert_eq!((network.edges[0].source, network.edges[0].target), (1, 2));
        }
    }

    #[test]
    fn other_oneway_values_are_two_way() {
        for value in ["no", "-1", "reversible"] {
            let network = extract(
                MemorySource::default()
                    .node(1, 101.65, 3.15)
                    .node(2, 101.66, 3.16)
                    .way(
                        OsmWay::new(100, vec![1, 2])
                            .with_tag("highway", "primary")
                            .with_tag("oneway", value),
                    ),
            );
            assert_eq!(network.edges.len(), 2, "oneway={value}");
        }
    }

    #[test]
    fn unlisted_and_untagged_ways_are_skipped() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.66, 3.16)
                .way(OsmWay::new(100, vec![1, 2]).with_tag("highway", "footway"))
                .way(OsmWay::new(101, vec![1, 2]).with_tag("building", "yes")),
        );
        assert!(network.edges.is_empty());
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.stats.ways_rejected, 1);
        assert_eq!(network.stats.ways_unclassified, 1);
    }

    #[test]
    fn straddling_way_loses_outside_segments() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.66, 3.16)
                .node(3, 101.75, 3.16)
                .node(4, 101.67, 3.17)
                .node(5, 101.68, 3.18)
                .way(
                    OsmWay::new(100, vec![1, 2, 3, 4, 5])
                        .with_tag("highway", "residential")
                        .with_tag("oneway", "yes"),
                ),
        );
        let pairs: Vec<_> = network.edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, [(1, 2), (4, 5)]);
        assert_eq!(network.stats.segments_dropped, 2);
    }

    #[test]
    fn way_outside_box_yields_nothing() {
        let network = extract(
            MemorySource::default()
                .node(1, 100.0, 3.15)
                .node(2, 100.1, 3.16)
                .way(OsmWay::new(100, vec![1, 2]).with_tag("highway", "primary")),
        );
        assert!(network.edges.is_empty());
        assert_eq!(network.stats.ways_used, 0);
    }

    #[test]
    fn parallel_ways_are_not_merged() {
        let network = extract(
            MemorySource::default()
                .node(1, 101.65, 3.15)
                .node(2, 101.66, 3.16)
                .way(
                    OsmWay::new(100, vec![1, 2])
                        .with_tag("highway", "primary")
                        .with_tag("oneway", "yes"),
                )
                .way(
                    OsmWay::new(101, vec![1, 2])
                        .with_tag("highway", "secondary")
                        .with_tag("oneway", "yes"),
                ),
        );
        assert_eq!(network.edges.len(), 2);
        assert!(network.edges.iter().all(|e| (e.source, e.target) == (1, 2)));
    }
}
