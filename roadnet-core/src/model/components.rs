//! Road network components - nodes and edges

use geo::{Coord, LineString, Point};

use crate::OsmNodeId;

/// Road graph node
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    /// OSM ID of the node
    pub id: OsmNodeId,
    /// Node coordinates, x = longitude, y = latitude
    pub geometry: Point<f64>,
}

impl RoadNode {
    pub fn new(id: OsmNodeId, lon: f64, lat: f64) -> Self {
        Self {
            id,
            geometry: Point::new(lon, lat),
        }
    }

    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }
}

/// Road graph edge (directed road segment)
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    /// Value of the `highway` tag of the originating way
    pub highway: String,
    /// Segment geometry in (lon, lat), two points for extracted edges
    pub geometry: LineString<f64>,
    /// Geodesic length in meters, set by distance annotation
    pub distance: Option<f64>,
}

impl RoadEdge {
    pub fn segment(highway: impl Into<String>, start: Coord<f64>, end: Coord<f64>) -> Self {
        Self {
            highway: highway.into(),
            geometry: LineString::new(vec![start, end]),
            distance: None,
        }
    }

    /// Edge for the opposite direction with its own reversed geometry
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut coords = self.geometry.0.clone();
        coords.reverse();
        Self {
            highway: self.highway.clone(),
            geometry: LineString::new(coords),
            distance: self.distance,
        }
    }

    /// Endpoints when the geometry is exactly a two-point segment
    pub fn segment_endpoints(&self) -> Option<(Coord<f64>, Coord<f64>)> {
        match self.geometry.0.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }
}
