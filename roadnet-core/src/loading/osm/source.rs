//! Map data sources driving an element visitor.
//!
//! Sources deliver elements in their native order. For OSM extracts this
//! means every node referenced by a way is delivered before the way.

use std::path::{Path, PathBuf};

use osmpbf::{Element, ElementReader};

use crate::{Error, OsmNodeId, OsmWayId};

/// Node element with its position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsmNode {
    pub id: OsmNodeId,
    pub lon: f64,
    pub lat: f64,
}

/// Way element with ordered node references and tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsmWay {
    pub id: OsmWayId,
    pub refs: Vec<OsmNodeId>,
    pub tags: Vec<(String, String)>,
}

impl OsmWay {
    pub fn new(id: OsmWayId, refs: Vec<OsmNodeId>) -> Self {
        Self {
            id,
            refs,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OsmElement {
    Node(OsmNode),
    Way(OsmWay),
}

/// Per-element callbacks invoked by a source
pub trait OsmHandler {
    fn node(&mut self, node: &OsmNode);
    fn way(&mut self, way: &OsmWay);
}

/// Single-pass, non-restartable element stream
pub trait OsmSource {
    /// Feeds every element to `handler` in source order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read
    fn apply<H: OsmHandler>(self, handler: &mut H) -> Result<(), Error>;
}

/// `.osm.pbf` file read with `osmpbf`
#[derive(Debug, Clone)]
pub struct PbfSource {
    path: PathBuf,
}

impl PbfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OsmSource for PbfSource {
    fn apply<H: OsmHandler>(self, handler: &mut H) -> Result<(), Error> {
        let reader = ElementReader::from_path(&self.path)?;
        reader.for_each(|element| match element {
            Element::Node(node) => handler.node(&OsmNode {
                id: node.id(),
                lon: node.lon(),
                lat: node.lat(),
            }),
            Element::DenseNode(node) => handler.node(&OsmNode {
                id: node.id(),
                lon: node.lon(),
                lat: node.lat(),
            }),
            Element::Way(way) => {
                let tags = way
                    .tags()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                handler.way(&OsmWay {
                    id: way.id(),
                    refs: way.refs().collect(),
                    tags,
                });
            }
            Element::Relation(_) => {}
        })?;
        Ok(())
    }
}

/// Elements replayed from memory, in the order given
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    elements: Vec<OsmElement>,
}

impl MemorySource {
    pub fn new(elements: Vec<OsmElement>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn node(mut self, id: OsmNodeId, lon: f64, lat: f64) -> Self {
        self.elements.push(OsmElement::Node(OsmNode { id, lon, lat }));
        self
    }

    #[must_use]
    pub fn way(mut self, way: OsmWay) -> Self {
        self.elements.push(OsmElement::Way(way));
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl OsmSource for MemorySource {
    fn apply<H: OsmHandler>(self, handler: &mut H) -> Result<(), Error> {
        for element in &self.elements {
            match element {
                OsmElement::Node(node) => handler.node(node),
                OsmElement::Way(way) => handler.way(way),
            }
        }
        Ok(())
    }
}
