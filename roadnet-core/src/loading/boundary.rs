//! Combining per-region boundaries into one bounding box

use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, info};

use crate::{BoundingBox, Error, RunContext};

/// Source of per-region bounding boxes
pub trait BoundaryLookup {
    /// # Errors
    ///
    /// Returns an error if the region cannot be resolved
    fn bounding_box(&self, region: &str) -> Result<BoundingBox, Error>;
}

impl<F> BoundaryLookup for F
where
    F: Fn(&str) -> Result<BoundingBox, Error>,
{
    fn bounding_box(&self, region: &str) -> Result<BoundingBox, Error> {
        self(region)
    }
}

/// Lookup backed by a fixed table of named boxes
#[derive(Debug, Clone, Default)]
pub struct StaticBoundaryLookup {
    boxes: HashMap<String, BoundingBox>,
}

impl StaticBoundaryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: impl Into<String>, bbox: BoundingBox) {
        self.boxes.insert(region.into(), bbox);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, BoundingBox)> for StaticBoundaryLookup {
    fn from_iter<T: IntoIterator<Item = (S, BoundingBox)>>(iter: T) -> Self {
        Self {
            boxes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl BoundaryLookup for StaticBoundaryLookup {
    fn bounding_box(&self, region: &str) -> Result<BoundingBox, Error> {
        let bbox = self.boxes.get(region).ok_or_else(|| Error::RegionLookup {
            region: region.to_string(),
            reason: "region is not defined".to_string(),
        })?;
        if !bbox.is_valid() {
            return Err(Error::RegionLookup {
                region: region.to_string(),
                reason: format!("invalid bounding box {bbox:?}"),
            });
        }
        Ok(*bbox)
    }
}

/// Union bounding box of all regions
///
/// # Errors
///
/// Fails if `regions` is empty or any region cannot be resolved
pub fn resolve_bounding_box<L>(
    lookup: &L,
    regions: &[String],
    ctx: &RunContext,
) -> Result<BoundingBox, Error>
where
    L: BoundaryLookup + ?Sized,
{
    let combined = regions
        .iter()
        .map(|region| {
            let bbox = lookup.bounding_box(region)?;
            debug!("{ctx} Region '{region}' resolved to {bbox:?}");
            Ok::<_, Error>(bbox)
        })
        .process_results(|boxes| boxes.reduce(|acc, bbox| acc.union(&bbox)))?
        .ok_or(Error::NoRegions)?;

    info!(
        "{ctx} Combined bounding box of {} region(s): ({}, {}, {}, {})",
        regions.len(),
        combined.min_lon,
        combined.min_lat,
        combined.max_lon,
        combined.max_lat
    );
    Ok(combined)
}
