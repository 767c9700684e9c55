use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use crate::{Error, RoadGraph};

/// Default cap on exported edges, keeps files loadable in web map viewers
pub const MAX_EXPORT_EDGES: usize = 300_000;

/// Converts graph edges to a `GeoJSON` `FeatureCollection` of `LineString`s.
///
/// At most `max_edges` edges are exported, in graph order.
pub fn graph_to_geojson(graph: &RoadGraph, max_edges: usize) -> Result<FeatureCollection, Error> {
    let features = graph
        .edges()
        .take(max_edges)
        .map(|(source, target, edge)| {
            let geometry = Geometry::new(GeometryValue::from(&edge.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "source": source,
                    "target": target,
                    "highway": edge.highway,
                    "distance": edge.distance,
                }
            });
            serde_json::from_value::<Feature>(value)
                .map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;
    use crate::{RoadEdge, RoadNode};

    fn graph() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_node(RoadNode::new(1, 101.65, 3.15));
        graph.add_node(RoadNode::new(2, 101.66, 3.16));
        let segment = RoadEdge::segment(
            "secondary",
            coord! { x: 101.65, y: 3.15 },
            coord! { x: 101.66, y: 3.16 },
        );
        graph.add_edge(1, 2, segment.clone()).unwrap();
        graph.add_edge(2, 1, segment.reversed()).unwrap();
        graph
    }

    #[test]
    fn exports_one_feature_per_edge() {
        let collection = graph_to_geojson(&graph(), MAX_EXPORT_EDGES).unwrap();
        assert_eq!(collection.features.len(), 2);

        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["source"], 1);
        assert_eq!(properties["target"], 2);
        assert_eq!(properties["highway"], "secondary");
        assert!(properties["distance"].is_null());
    }

    #[test]
    fn features_carry_line_geometry() {
        let collection = graph_to_geojson(&graph(), MAX_EXPORT_EDGES).unwrap();
        let geometry = collection.features[1].geometry.as_ref().unwrap();
        let GeometryValue::LineString { coordinates } = &geometry.value else {
            panic!("expected a LineString, got {:?}", geometry.value);
        };
        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[0][0], 101.66);
        assert_eq!(coordinates[1][1], 3.15);
    }

    #[test]
    fn respects_edge_limit() {
        let collection = graph_to_geojson(&graph(), 1).unwrap();
        assert_eq!(collection.features.len(), 1);
    }
}
